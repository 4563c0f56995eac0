use rosu_map::section::general::GameMode;

use crate::any::HitResult;

/// Aggregation for a score's current state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TaikoScoreState {
    /// Maximum combo that the score has had so far.
    /// **Not** the maximum possible combo of the map so far.
    pub max_combo: u32,
    /// Amount of current 300s.
    pub n300: u32,
    /// Amount of current 100s.
    pub n100: u32,
    /// Amount of current misses.
    pub misses: u32,
}

impl TaikoScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            max_combo: 0,
            n300: 0,
            n100: 0,
            misses: 0,
        }
    }

    /// Return the total amount of hits by adding everything up.
    pub const fn total_hits(&self) -> u32 {
        self.n300 + self.n100 + self.misses
    }

    /// Amount of notes that were not missed.
    pub const fn successful_hits(&self) -> u32 {
        self.n300 + self.n100
    }

    /// Calculate the accuracy between `0.0` and `1.0` for this state.
    pub fn accuracy(&self) -> f64 {
        HitResult::accuracy(
            GameMode::Taiko,
            &[
                (HitResult::Great, self.n300),
                (HitResult::Ok, self.n100),
                (HitResult::Miss, self.misses),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy() {
        let state = TaikoScoreState {
            max_combo: 0,
            n300: 2,
            n100: 1,
            misses: 1,
        };

        assert_eq!(state.total_hits(), 4);
        assert!((state.accuracy() - 750.0 / 1200.0).abs() < 1e-12);
        assert!(TaikoScoreState::new().accuracy().abs() < f64::EPSILON);
    }
}
