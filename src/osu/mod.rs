pub use self::{attributes::OsuDifficultyAttributes, strains::OsuStrains};

mod attributes;
pub(crate) mod difficulty;
pub(crate) mod strains;
