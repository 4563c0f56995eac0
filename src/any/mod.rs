pub use self::{
    attributes::{DifficultyAttributes, PerformanceAttributes},
    difficulty::Difficulty,
    hit_result::HitResult,
    performance::Performance,
    strains::Strains,
};

mod attributes;
pub(crate) mod difficulty;
mod hit_result;
mod performance;
mod strains;
