use rosu_map::section::general::GameMode;

use crate::any::HitResult;

/// Aggregation for a score's current state i.e. what are the current hitresults.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ManiaScoreState {
    /// Amount of current 320s.
    pub n320: u32,
    /// Amount of current 300s.
    pub n300: u32,
    /// Amount of current 200s.
    pub n200: u32,
    /// Amount of current 100s.
    pub n100: u32,
    /// Amount of current 50s.
    pub n50: u32,
    /// Amount of current misses.
    pub misses: u32,
}

impl ManiaScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            n320: 0,
            n300: 0,
            n200: 0,
            n100: 0,
            n50: 0,
            misses: 0,
        }
    }

    /// Return the total amount of hits by adding everything up.
    pub const fn total_hits(&self) -> u32 {
        self.n320 + self.n300 + self.n200 + self.n100 + self.n50 + self.misses
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    ///
    /// n320s weigh more than n300s.
    pub fn accuracy(&self) -> f64 {
        HitResult::accuracy(
            GameMode::Mania,
            &[
                (HitResult::Perfect, self.n320),
                (HitResult::Great, self.n300),
                (HitResult::Good, self.n200),
                (HitResult::Ok, self.n100),
                (HitResult::Meh, self.n50),
                (HitResult::Miss, self.misses),
            ],
        )
    }
}
