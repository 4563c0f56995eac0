use std::cmp;

use rosu_map::section::general::GameMode;

use crate::{
    any::Performance,
    model::{error::CalculateError, mods::GameMods},
};

use self::calculator::ManiaPerformanceCalculator;

use super::{
    attributes::{ManiaDifficultyAttributes, ManiaPerformanceAttributes},
    score_state::ManiaScoreState,
};

mod calculator;

/// Performance calculator on osu!mania maps.
///
/// Hit counts that are not specified are filled up with n320s.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct ManiaPerformance {
    attrs: ManiaDifficultyAttributes,
    mods: GameMods,
    n320: Option<u32>,
    n300: Option<u32>,
    n200: Option<u32>,
    n100: Option<u32>,
    n50: Option<u32>,
    misses: Option<u32>,
}

impl ManiaPerformance {
    /// Create a new performance calculator for osu!mania maps.
    pub const fn new(attrs: ManiaDifficultyAttributes) -> Self {
        Self {
            attrs,
            mods: GameMods::DEFAULT,
            n320: None,
            n300: None,
            n200: None,
            n100: None,
            n50: None,
            misses: None,
        }
    }

    /// Try to create a new performance calculator from any kind of
    /// difficulty attributes.
    ///
    /// Fails if the attributes belong to another mode.
    pub fn try_new(performance: impl Into<Performance>) -> Result<Self, CalculateError> {
        match performance.into() {
            Performance::Mania(calc) => Ok(calc),
            Performance::Taiko(_) => Err(CalculateError::UnsupportedMode(GameMode::Taiko)),
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

    /// Specify the amount of 320s of a play.
    pub const fn n320(mut self, n320: u32) -> Self {
        self.n320 = Some(n320);

        self
    }

    /// Specify the amount of 300s of a play.
    pub const fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of 200s of a play.
    pub const fn n200(mut self, n200: u32) -> Self {
        self.n200 = Some(n200);

        self
    }

    /// Specify the amount of 100s of a play.
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of 50s of a play.
    pub const fn n50(mut self, n50: u32) -> Self {
        self.n50 = Some(n50);

        self
    }

    /// Specify the amount of misses of a play.
    pub const fn misses(mut self, n_misses: u32) -> Self {
        self.misses = Some(n_misses);

        self
    }

    /// Provide parameters through a [`ManiaScoreState`].
    #[allow(clippy::needless_pass_by_value)]
    pub const fn state(mut self, state: ManiaScoreState) -> Self {
        let ManiaScoreState {
            n320,
            n300,
            n200,
            n100,
            n50,
            misses,
        } = state;

        self.n320 = Some(n320);
        self.n300 = Some(n300);
        self.n200 = Some(n200);
        self.n100 = Some(n100);
        self.n50 = Some(n50);
        self.misses = Some(misses);

        self
    }

    /// Create the [`ManiaScoreState`] that will be used for performance
    /// calculation.
    ///
    /// Counts are capped so that their sum does not exceed the amount of
    /// objects, starting with the misses.
    pub fn generate_state(&self) -> ManiaScoreState {
        let mut n_remaining = self.attrs.n_objects;

        let mut take = |n: Option<u32>| {
            let n = cmp::min(n.unwrap_or(0), n_remaining);
            n_remaining -= n;

            n
        };

        let misses = take(self.misses);
        let n50 = take(self.n50);
        let n100 = take(self.n100);
        let n200 = take(self.n200);
        let n300 = take(self.n300);
        let n320 = take(self.n320);

        // Unspecified judgements become n320s
        let n320 = n320 + n_remaining;

        ManiaScoreState {
            n320,
            n300,
            n200,
            n100,
            n50,
            misses,
        }
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(self) -> ManiaPerformanceAttributes {
        let state = self.generate_state();

        let attrs = ManiaPerformanceCalculator::new(self.attrs, &self.mods, state).calculate();

        #[cfg(feature = "tracing")]
        tracing::debug!(pp = attrs.pp, stars = attrs.stars(), "calculated mania performance");

        attrs
    }
}

impl From<ManiaDifficultyAttributes> for ManiaPerformance {
    fn from(attrs: ManiaDifficultyAttributes) -> Self {
        Self::new(attrs)
    }
}

impl From<ManiaPerformanceAttributes> for ManiaPerformance {
    fn from(attrs: ManiaPerformanceAttributes) -> Self {
        Self::new(attrs.difficulty)
    }
}
