use crate::{
    any::difficulty::object::IDifficultyObject,
    osu::difficulty::object::OsuDifficultyObject,
    util::difficulty::{bpm_to_milliseconds, milliseconds_to_bpm},
};

pub struct SpeedEvaluator;

impl SpeedEvaluator {
    // 1.25 circles distance between centers
    const SINGLE_SPACING_THRESHOLD: f64 = OsuDifficultyObject::NORMALIZED_DIAMETER as f64 * 1.25;
    // 200 BPM 1/4th
    const MIN_SPEED_BONUS: f64 = 200.0;
    const SPEED_BALANCING_FACTOR: f64 = 40.0;
    const DIST_MULTIPLIER: f64 = 0.8;

    pub const MIN_LOOKBACK: usize = 1;

    /// Evaluates the difficulty of tapping the current object, based on:
    /// - time between pressing the previous and current object,
    /// - distance between those objects,
    /// - and how easily they can be cheesed.
    pub fn evaluate_diff_of<'a>(
        curr: &'a OsuDifficultyObject<'a>,
        diff_objects: &'a [OsuDifficultyObject<'a>],
        hit_window: f64,
        autopilot: bool,
    ) -> f64 {
        if !curr.is_evaluable(Self::MIN_LOOKBACK) {
            return 0.0;
        }

        let prev = curr.previous(0, diff_objects);
        let next = curr.next(0, diff_objects);

        let mut strain_time = curr.strain_time;
        let doubletapness = 1.0 - curr.get_doubletapness(next, hit_window);

        // Cap the delta time to the great hit window. 0.93 keeps 260 BPM
        // OD8 streams from being nerfed harshly while 0.92 limits the cap.
        if hit_window > 0.0 {
            strain_time /= ((strain_time / hit_window) / 0.93).clamp(0.92, 1.0);
        }

        let speed_bonus = if milliseconds_to_bpm(strain_time, None) > Self::MIN_SPEED_BONUS {
            let base = (bpm_to_milliseconds(Self::MIN_SPEED_BONUS, None) - strain_time)
                / Self::SPEED_BALANCING_FACTOR;

            0.75 * base.powf(2.0)
        } else {
            0.0
        };

        let travel_dist = prev.map_or(0.0, |obj| obj.travel_dist);
        let dist = Self::SINGLE_SPACING_THRESHOLD.min(travel_dist + curr.min_jump_dist);

        // Max distance bonus is `DIST_MULTIPLIER` at the single spacing threshold
        let mut dist_bonus =
            (dist / Self::SINGLE_SPACING_THRESHOLD).powf(3.95) * Self::DIST_MULTIPLIER;

        dist_bonus *= curr.small_circle_bonus.sqrt();

        if autopilot {
            dist_bonus = 0.0;
        }

        let difficulty = (1.0 + speed_bonus + dist_bonus) * 1000.0 / strain_time;

        // Penalize doubletappable doubles
        difficulty * doubletapness
    }
}
