pub use self::{
    attributes::{ManiaDifficultyAttributes, ManiaPerformanceAttributes},
    performance::ManiaPerformance,
    score_state::ManiaScoreState,
    strains::ManiaStrains,
};

mod attributes;
pub(crate) mod difficulty;
mod performance;
mod score_state;
pub(crate) mod strains;
