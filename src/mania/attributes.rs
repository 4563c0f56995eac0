use crate::mania::performance::ManiaPerformance;

/// Star rating of an osu!mania chart and everything its performance
/// calculation builds upon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManiaDifficultyAttributes {
    pub stars: f64,
    /// Consistency of the strain peaks, `1.0` when the chart is evenly hard
    /// and towards `0.0` when a few spikes carry the rating.
    ///
    /// Splits the hits into hard and easy ones for the length bonus.
    pub strain_factor: f64,
    /// Great hit window in ms at the calculated clock rate.
    pub great_hit_window: f64,
    /// Notes and hold notes combined.
    pub n_objects: u32,
    pub n_hold_notes: u32,
    /// Whether the chart was converted from osu!standard.
    pub is_convert: bool,
    /// [`ManiaDifficultyAttributes::VERSION`] at the time of calculation.
    pub version: u32,
}

impl ManiaDifficultyAttributes {
    /// Bumped whenever a formula of the osu!mania calculation changes.
    pub const VERSION: u32 = 20_241_007;

    pub const fn n_objects(&self) -> u32 {
        self.n_objects
    }

    pub const fn is_convert(&self) -> bool {
        self.is_convert
    }

    /// Start a performance calculation on top of these attributes.
    pub fn performance(self) -> ManiaPerformance {
        ManiaPerformance::new(self)
    }
}

/// Performance of a score on an osu!mania chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManiaPerformanceAttributes {
    pub difficulty: ManiaDifficultyAttributes,
    pub pp: f64,
    /// pp before mod multipliers.
    pub pp_difficulty: f64,
}

impl ManiaPerformanceAttributes {
    pub const fn stars(&self) -> f64 {
        self.difficulty.stars
    }

    pub const fn pp(&self) -> f64 {
        self.pp
    }

    pub const fn n_objects(&self) -> u32 {
        self.difficulty.n_objects
    }

    /// Start another performance calculation on the same chart.
    pub fn performance(self) -> ManiaPerformance {
        ManiaPerformance::new(self.difficulty)
    }
}

impl From<ManiaPerformanceAttributes> for ManiaDifficultyAttributes {
    fn from(attrs: ManiaPerformanceAttributes) -> Self {
        attrs.difficulty
    }
}
