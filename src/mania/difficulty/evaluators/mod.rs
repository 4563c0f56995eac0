pub use self::{individual::IndividualStrainEvaluator, overall::OverallStrainEvaluator};

mod individual;
mod overall;
