use crate::taiko::performance::TaikoPerformance;

/// Star rating of an osu!taiko chart and everything its performance
/// calculation builds upon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaikoDifficultyAttributes {
    /// Share of the star rating coming from stamina.
    pub stamina: f64,
    /// Share of the star rating coming from reading the scroll speed.
    pub reading: f64,
    /// Great hit window in ms at the calculated clock rate.
    pub great_hit_window: f64,
    /// Ok hit window in ms at the calculated clock rate.
    pub ok_hit_window: f64,
    /// `(single colour stamina / stamina)^5`; close to 1 for charts whose
    /// stamina comes from mono coloured streams.
    pub mono_stamina_factor: f64,
    pub stars: f64,
    /// Amount of hittable notes, drum rolls included and swells excluded.
    pub max_combo: u32,
    /// Whether the chart was converted from osu!standard.
    pub is_convert: bool,
    /// [`TaikoDifficultyAttributes::VERSION`] at the time of calculation.
    pub version: u32,
}

impl TaikoDifficultyAttributes {
    /// Bumped whenever a formula of the osu!taiko calculation changes.
    pub const VERSION: u32 = 20_250_306;

    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub const fn is_convert(&self) -> bool {
        self.is_convert
    }

    /// Start a performance calculation on top of these attributes.
    pub fn performance(self) -> TaikoPerformance {
        TaikoPerformance::new(self)
    }
}

/// Performance of a score on an osu!taiko chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaikoPerformanceAttributes {
    pub difficulty: TaikoDifficultyAttributes,
    pub pp: f64,
    /// pp awarded for the estimated unstable rate.
    pub pp_acc: f64,
    /// pp awarded for the star rating.
    pub pp_difficulty: f64,
    /// Misses scaled up for short charts, where each one weighs more.
    pub effective_miss_count: f64,
    /// Upper bound of the tap deviation times ten.
    ///
    /// `None` if the score has no greats or the chart has no hit window.
    pub estimated_unstable_rate: Option<f64>,
}

impl TaikoPerformanceAttributes {
    pub const fn stars(&self) -> f64 {
        self.difficulty.stars
    }

    pub const fn pp(&self) -> f64 {
        self.pp
    }

    pub const fn max_combo(&self) -> u32 {
        self.difficulty.max_combo
    }

    /// Start another performance calculation on the same chart.
    pub fn performance(self) -> TaikoPerformance {
        TaikoPerformance::new(self.difficulty)
    }
}

impl From<TaikoPerformanceAttributes> for TaikoDifficultyAttributes {
    fn from(attrs: TaikoPerformanceAttributes) -> Self {
        attrs.difficulty
    }
}
