use std::cmp;

use rosu_map::section::general::GameMode;

use crate::{
    any::{HitResult, Performance},
    model::{error::CalculateError, mods::GameMods},
};

use self::calculator::TaikoPerformanceCalculator;

use super::{
    attributes::{TaikoDifficultyAttributes, TaikoPerformanceAttributes},
    score_state::TaikoScoreState,
};

mod calculator;

/// Performance calculator on osu!taiko maps.
///
/// Hit counts that are not specified are filled up with n300s. If an
/// accuracy is given instead, n300s and n100s are distributed to match it
/// as closely as possible.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct TaikoPerformance {
    attrs: TaikoDifficultyAttributes,
    mods: GameMods,
    combo: Option<u32>,
    acc: Option<f64>,
    n300: Option<u32>,
    n100: Option<u32>,
    misses: Option<u32>,
}

impl TaikoPerformance {
    /// Create a new performance calculator for osu!taiko maps.
    pub const fn new(attrs: TaikoDifficultyAttributes) -> Self {
        Self {
            attrs,
            mods: GameMods::DEFAULT,
            combo: None,
            acc: None,
            n300: None,
            n100: None,
            misses: None,
        }
    }

    /// Try to create a new performance calculator from any kind of
    /// difficulty attributes.
    ///
    /// Fails if the attributes belong to another mode.
    pub fn try_new(performance: impl Into<Performance>) -> Result<Self, CalculateError> {
        match performance.into() {
            Performance::Taiko(calc) => Ok(calc),
            Performance::Mania(_) => Err(CalculateError::UnsupportedMode(GameMode::Mania)),
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameMods`]
    ///
    /// Note that the mods should match the ones used for the difficulty
    /// attributes.
    pub fn mods(mut self, mods: impl Into<GameMods>) -> Self {
        self.mods = mods.into();

        self
    }

    /// Specify the max combo of the play.
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Specify the amount of 300s of a play.
    pub const fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of 100s of a play.
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of misses of the play.
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.misses = Some(n_misses);

        self
    }

    /// Specify the accuracy of a play between `0.0` and `100.0`.
    /// This will be used to generate matching hitresults.
    pub fn accuracy(mut self, acc: f64) -> Self {
        self.acc = Some(acc.clamp(0.0, 100.0) / 100.0);

        self
    }

    /// Provide parameters through a [`TaikoScoreState`].
    #[allow(clippy::needless_pass_by_value)]
    pub const fn state(mut self, state: TaikoScoreState) -> Self {
        let TaikoScoreState {
            max_combo,
            n300,
            n100,
            misses,
        } = state;

        self.combo = Some(max_combo);
        self.n300 = Some(n300);
        self.n100 = Some(n100);
        self.misses = Some(misses);

        self
    }

    /// Create the [`TaikoScoreState`] that will be used for performance
    /// calculation.
    pub fn generate_state(&self) -> TaikoScoreState {
        let total_result_count = self.attrs.max_combo;

        let misses = self.misses.map_or(0, |n| cmp::min(n, total_result_count));
        let n_remaining = total_result_count - misses;

        let mut n300 = self.n300.map_or(0, |n| cmp::min(n, n_remaining));
        let mut n100 = self.n100.map_or(0, |n| cmp::min(n, n_remaining - n300));

        match (self.acc, self.n300, self.n100) {
            (Some(acc), None, None) => {
                let target_total = acc * f64::from(2 * total_result_count);
                let raw_n300 = (target_total - f64::from(n_remaining)).max(0.0);

                let min_n300 = cmp::min(n_remaining, raw_n300.floor() as u32);
                let max_n300 = cmp::min(n_remaining, raw_n300.ceil() as u32);

                let mut best_dist = f64::MAX;

                for new300 in min_n300..=max_n300 {
                    let new100 = n_remaining - new300;
                    let dist = (acc - accuracy(new300, new100, misses)).abs();

                    if dist < best_dist {
                        best_dist = dist;
                        n300 = new300;
                        n100 = new100;
                    }
                }
            }
            (_, None, _) => n300 = n_remaining - n100,
            (_, Some(_), None) => n100 = n_remaining - n300,
            (_, Some(_), Some(_)) => n300 += n_remaining - n300 - n100,
        }

        let max_possible_combo = total_result_count.saturating_sub(misses);

        let max_combo = self.combo.map_or(max_possible_combo, |combo| {
            cmp::min(combo, max_possible_combo)
        });

        TaikoScoreState {
            max_combo,
            n300,
            n100,
            misses,
        }
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(self) -> TaikoPerformanceAttributes {
        let state = self.generate_state();

        let attrs = TaikoPerformanceCalculator::new(self.attrs, &self.mods, state).calculate();

        #[cfg(feature = "tracing")]
        tracing::debug!(pp = attrs.pp, stars = attrs.stars(), "calculated taiko performance");

        attrs
    }
}

impl From<TaikoDifficultyAttributes> for TaikoPerformance {
    fn from(attrs: TaikoDifficultyAttributes) -> Self {
        Self::new(attrs)
    }
}

impl From<TaikoPerformanceAttributes> for TaikoPerformance {
    fn from(attrs: TaikoPerformanceAttributes) -> Self {
        Self::new(attrs.difficulty)
    }
}

fn accuracy(n300: u32, n100: u32, misses: u32) -> f64 {
    HitResult::accuracy(
        GameMode::Taiko,
        &[
            (HitResult::Great, n300),
            (HitResult::Ok, n100),
            (HitResult::Miss, misses),
        ],
    )
}
