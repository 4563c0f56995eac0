use crate::{
    model::beatmap::BeatmapAttributes, osu::difficulty::object::OsuDifficultyObject,
};

/// Per-chart values the [`ReadingEvaluator`] depends on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReadingContext {
    /// Approach rate after HR and EZ but before the clock rate.
    pub approach_rate: f64,
    /// Time in ms between an object appearing and its start time, after mods
    /// and clock rate.
    pub time_preempt: f64,
    pub hidden: bool,
}

impl ReadingContext {
    pub const fn new(map_attrs: &BeatmapAttributes, hidden: bool) -> Self {
        Self {
            approach_rate: map_attrs.base_ar,
            time_preempt: map_attrs.hit_windows.preempt,
            hidden,
        }
    }
}

pub struct ReadingEvaluator;

impl ReadingEvaluator {
    const HIGH_AR_THRESHOLD: f64 = 10.33;

    pub const MIN_LOOKBACK: usize = 2;

    /// Evaluates the visual density of the current object, based on:
    /// - how long objects stay visible,
    /// - and how many objects are visible at the same time.
    pub fn evaluate_diff_of(curr: &OsuDifficultyObject<'_>, ctx: &ReadingContext) -> f64 {
        if !curr.is_evaluable(Self::MIN_LOOKBACK) {
            return 0.0;
        }

        let density = ctx.time_preempt / curr.strain_time;

        (1.0 + Self::approach_rate_curve(ctx)) * (1.0 + density)
    }

    fn approach_rate_curve(ctx: &ReadingContext) -> f64 {
        let ar = ctx.approach_rate;

        if ctx.hidden {
            0.15 * (13.0 - ar)
        } else if ar < Self::HIGH_AR_THRESHOLD {
            0.05 * (13.0 - ar)
        } else {
            0.3 * (ar - Self::HIGH_AR_THRESHOLD)
        }
    }
}
