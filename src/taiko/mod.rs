pub use self::{
    attributes::{TaikoDifficultyAttributes, TaikoPerformanceAttributes},
    performance::TaikoPerformance,
    score_state::TaikoScoreState,
    strains::TaikoStrains,
};

mod attributes;
pub(crate) mod difficulty;
mod performance;
mod score_state;
pub(crate) mod strains;
