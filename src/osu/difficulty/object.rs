use rosu_map::util::Pos;

use crate::{
    any::difficulty::object::{HasStartTime, IDifficultyObject},
    model::hit_object::{HitObject, HitObjectKind},
};

use super::scaling_factor::ScalingFactor;

pub struct OsuDifficultyObject<'a> {
    pub idx: usize,
    pub base: &'a HitObject,
    /// The hit object right before `base`.
    pub last: &'a HitObject,
    pub start_time: f64,
    pub delta_time: f64,

    /// `delta_time` but capped to [`OsuDifficultyObject::MIN_DELTA_TIME`].
    pub strain_time: f64,
    pub lazy_jump_dist: f64,
    pub min_jump_dist: f64,
    pub min_jump_time: f64,
    pub travel_dist: f64,
    pub travel_time: f64,
    pub lazy_end_pos: Option<Pos>,
    pub lazy_travel_dist: f64,
    pub lazy_travel_time: f64,
    pub angle: Option<f64>,

    pub small_circle_bonus: f64,
}

impl<'a> OsuDifficultyObject<'a> {
    pub const NORMALIZED_RADIUS: i32 = 50;
    pub const NORMALIZED_DIAMETER: i32 = Self::NORMALIZED_RADIUS * 2;

    pub const MIN_DELTA_TIME: f64 = 25.0;
    const MAX_SLIDER_RADIUS: f32 = Self::NORMALIZED_RADIUS as f32 * 2.4;
    const ASSUMED_SLIDER_RADIUS: f32 = Self::NORMALIZED_RADIUS as f32 * 1.8;

    /// Turn the hit objects into difficulty objects.
    ///
    /// The first hit object has no difficulty object so the result contains
    /// one object less than the input, or none at all for an empty input.
    pub fn create_all(
        hit_objects: &'a [HitObject],
        scaling_factor: &ScalingFactor,
        clock_rate: f64,
    ) -> Vec<Self> {
        let mut diff_objects: Vec<Self> = Vec::with_capacity(hit_objects.len().saturating_sub(1));

        let pairs = hit_objects.iter().zip(hit_objects.iter().skip(1));

        for (idx, (last, h)) in pairs.enumerate() {
            let last_diff = idx.checked_sub(1).and_then(|i| diff_objects.get(i));
            let last_last_diff = idx.checked_sub(2).and_then(|i| diff_objects.get(i));

            let diff_object = Self::new(
                h,
                last,
                last_diff,
                last_last_diff,
                clock_rate,
                idx,
                scaling_factor,
            );

            diff_objects.push(diff_object);
        }

        diff_objects
    }

    fn new(
        hit_object: &'a HitObject,
        last_object: &'a HitObject,
        last_diff_obj: Option<&OsuDifficultyObject<'_>>,
        last_last_diff_obj: Option<&OsuDifficultyObject<'_>>,
        clock_rate: f64,
        idx: usize,
        scaling_factor: &ScalingFactor,
    ) -> Self {
        let delta_time = (hit_object.start_time - last_object.start_time) / clock_rate;
        let start_time = hit_object.start_time / clock_rate;

        let strain_time = delta_time.max(Self::MIN_DELTA_TIME);
        let small_circle_bonus = (1.0 + (30.0 - scaling_factor.radius) / 40.0).max(1.0);

        let mut this = Self {
            idx,
            base: hit_object,
            last: last_object,
            start_time,
            delta_time,
            strain_time,
            lazy_jump_dist: 0.0,
            min_jump_dist: 0.0,
            min_jump_time: 0.0,
            travel_dist: 0.0,
            travel_time: 0.0,
            lazy_end_pos: None,
            lazy_travel_dist: 0.0,
            lazy_travel_time: 0.0,
            angle: None,
            small_circle_bonus,
        };

        this.compute_slider_cursor_pos(scaling_factor.radius);
        this.set_distances(last_diff_obj, last_last_diff_obj, clock_rate, scaling_factor);

        this
    }

    /// How likely the object can be hit by tapping twice in quick succession
    /// with the same finger, between `0.0` and `1.0`.
    pub fn get_doubletapness(&self, next: Option<&Self>, hit_window: f64) -> f64 {
        let Some(next) = next else { return 0.0 };

        let hit_window = if self.base.is_spinner() {
            0.0
        } else {
            hit_window
        };

        let curr_delta_time = self.delta_time.max(1.0);
        let next_delta_time = next.delta_time.max(1.0);
        let delta_diff = (next_delta_time - curr_delta_time).abs();
        let speed_ratio = curr_delta_time / curr_delta_time.max(delta_diff);
        let window_ratio = (curr_delta_time / hit_window).min(1.0).powf(2.0);

        1.0 - speed_ratio.powf(1.0 - window_ratio)
    }

    /// Whether evaluators may look at this object, i.e. it is no spinner, it
    /// does not follow a spinner, and it has at least `min_lookback`
    /// difficulty objects before it.
    pub fn is_evaluable(&self, min_lookback: usize) -> bool {
        self.idx >= min_lookback && !self.base.is_spinner() && !self.last.is_spinner()
    }

    fn set_distances(
        &mut self,
        last_diff_obj: Option<&OsuDifficultyObject<'_>>,
        last_last_diff_obj: Option<&OsuDifficultyObject<'_>>,
        clock_rate: f64,
        scaling_factor: &ScalingFactor,
    ) {
        if let HitObjectKind::Slider(ref slider) = self.base.kind {
            self.travel_dist =
                self.lazy_travel_dist * (1.0 + slider.repeats as f64 / 2.5).powf(1.0 / 2.5);

            self.travel_time = (self.lazy_travel_time / clock_rate).max(Self::MIN_DELTA_TIME);
        }

        let last_object = self.last;

        if self.base.is_spinner() || last_object.is_spinner() {
            return;
        }

        let scaling_factor = scaling_factor.factor;

        let last_cursor_pos =
            last_diff_obj.map_or(last_object.pos, Self::get_end_cursor_pos);

        self.lazy_jump_dist =
            f64::from((self.base.pos * scaling_factor - last_cursor_pos * scaling_factor).length());
        self.min_jump_time = self.strain_time;
        self.min_jump_dist = self.lazy_jump_dist;

        let Some(last_diff_obj) = last_diff_obj else {
            return;
        };

        if last_object.is_slider() {
            let last_travel_time =
                (last_diff_obj.lazy_travel_time / clock_rate).max(Self::MIN_DELTA_TIME);
            self.min_jump_time = (self.strain_time - last_travel_time).max(Self::MIN_DELTA_TIME);

            let tail_jump_dist = (last_object.end_pos() - self.base.pos).length() * scaling_factor;

            let diff = f64::from(Self::MAX_SLIDER_RADIUS - Self::ASSUMED_SLIDER_RADIUS);
            let min = f64::from(tail_jump_dist - Self::MAX_SLIDER_RADIUS);
            self.min_jump_dist = (self.lazy_jump_dist - diff).min(min).max(0.0);
        }

        let Some(last_last_diff_obj) = last_last_diff_obj else {
            return;
        };

        if !last_last_diff_obj.base.is_spinner() {
            let last_last_cursor_pos = Self::get_end_cursor_pos(last_last_diff_obj);

            let v1 = last_last_cursor_pos - last_object.pos;
            let v2 = self.base.pos - last_cursor_pos;

            let dot = v1.dot(v2);
            let det = v1.x * v2.y - v1.y * v2.x;

            self.angle = Some(f64::from(det).atan2(f64::from(dot)).abs());
        }
    }

    /// Approximate the cursor movement through a slider.
    ///
    /// The cursor follows the slider's straight path from head to end and
    /// back on each repeat but only moves once the slider ball leaves the
    /// follow circle.
    fn compute_slider_cursor_pos(&mut self, radius: f64) {
        const TAIL_LENIENCY: f64 = -36.0;

        let HitObjectKind::Slider(ref slider) = self.base.kind else {
            return;
        };

        let head = self.base.pos;
        let start_time = self.base.start_time;
        let duration = slider.duration(start_time);
        let span_count = slider.span_count();

        let tracking_end_time =
            (start_time + duration + TAIL_LENIENCY).max(start_time + duration / 2.0);
        self.lazy_travel_time = tracking_end_time - start_time;

        let span_duration = duration / span_count as f64;

        // Progress along the path at the tracking end time
        let mut end_time_min = if span_duration > 0.0 {
            self.lazy_travel_time / span_duration
        } else {
            0.0
        };

        if end_time_min % 2.0 >= 1.0 {
            end_time_min = 1.0 - end_time_min % 1.0;
        } else {
            end_time_min %= 1.0;
        }

        let mut lazy_end_pos = head + (slider.end_pos - head) * end_time_min as f32;

        let mut curr_cursor_pos = head;
        let scaling_factor = f64::from(Self::NORMALIZED_RADIUS) / radius;

        for span in 1..=span_count {
            let span_end = if span % 2 == 1 { slider.end_pos } else { head };

            let mut curr_movement = span_end - curr_cursor_pos;
            let mut curr_movement_len = scaling_factor * f64::from(curr_movement.length());
            let mut required_movement = f64::from(Self::ASSUMED_SLIDER_RADIUS);

            if span == span_count {
                let lazy_movement = lazy_end_pos - curr_cursor_pos;

                if lazy_movement.length() < curr_movement.length() {
                    curr_movement = lazy_movement;
                }

                curr_movement_len = scaling_factor * f64::from(curr_movement.length());
            } else {
                // Repeat points only require the cursor to stay inside the
                // circle's radius
                required_movement = f64::from(Self::NORMALIZED_RADIUS);
            }

            if curr_movement_len > required_movement {
                curr_cursor_pos += curr_movement
                    * ((curr_movement_len - required_movement) / curr_movement_len) as f32;
                curr_movement_len *= (curr_movement_len - required_movement) / curr_movement_len;
                self.lazy_travel_dist += curr_movement_len;
            }

            if span == span_count {
                lazy_end_pos = curr_cursor_pos;
            }
        }

        self.lazy_end_pos = Some(lazy_end_pos);
    }

    fn get_end_cursor_pos(hit_object: &OsuDifficultyObject<'_>) -> Pos {
        hit_object.lazy_end_pos.unwrap_or(hit_object.base.pos)
    }
}

impl IDifficultyObject for OsuDifficultyObject<'_> {
    type DifficultyObjects = [Self];

    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for OsuDifficultyObject<'_> {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(hit_objects: &[HitObject], clock_rate: f64) -> Vec<OsuDifficultyObject<'_>> {
        OsuDifficultyObject::create_all(hit_objects, &ScalingFactor::new(4.0), clock_rate)
    }

    #[test]
    fn one_object_less() {
        let hit_objects: Vec<_> = (0..5)
            .map(|i| HitObject::circle(Pos::new(0.0, 0.0), f64::from(i) * 100.0))
            .collect();

        assert_eq!(create(&hit_objects, 1.0).len(), 4);
        assert!(create(&hit_objects[..1], 1.0).is_empty());
        assert!(create(&[], 1.0).is_empty());
    }

    #[test]
    fn timing_is_rate_adjusted() {
        let hit_objects = [
            HitObject::circle(Pos::new(0.0, 0.0), 0.0),
            HitObject::circle(Pos::new(100.0, 0.0), 300.0),
            HitObject::circle(Pos::new(200.0, 0.0), 310.0),
        ];

        let diff_objects = create(&hit_objects, 1.5);

        assert!((diff_objects[0].delta_time - 200.0).abs() < 1e-9);
        assert!((diff_objects[0].start_time - 200.0).abs() < 1e-9);
        assert!(
            (diff_objects[1].strain_time - OsuDifficultyObject::MIN_DELTA_TIME).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn no_jumps_around_spinners() {
        let hit_objects = [
            HitObject::circle(Pos::new(0.0, 0.0), 0.0),
            HitObject::spinner(Pos::new(256.0, 192.0), 500.0, 1500.0),
            HitObject::circle(Pos::new(400.0, 300.0), 2000.0),
        ];

        let diff_objects = create(&hit_objects, 1.0);

        assert!(diff_objects[0].lazy_jump_dist.abs() < f64::EPSILON);
        assert!(diff_objects[1].lazy_jump_dist.abs() < f64::EPSILON);
        assert!(!diff_objects[1].is_evaluable(0));
    }

    #[test]
    fn slider_travel() {
        let head = Pos::new(100.0, 100.0);
        let hit_objects = [
            HitObject::slider(head, 0.0, 600.0, Pos::new(300.0, 100.0), 1),
            HitObject::circle(Pos::new(100.0, 300.0), 800.0),
        ];

        let diff_objects = create(&hit_objects[..], 1.0);
        assert_eq!(diff_objects.len(), 1);

        let slider = OsuDifficultyObject::new(
            &hit_objects[0],
            &hit_objects[0],
            None,
            None,
            1.0,
            0,
            &ScalingFactor::new(4.0),
        );

        assert!(slider.lazy_travel_dist > 0.0);
        assert!((slider.lazy_travel_time - 564.0).abs() < 1e-9);
        assert!(slider.travel_dist > slider.lazy_travel_dist);
        assert!(slider.travel_time >= OsuDifficultyObject::MIN_DELTA_TIME);
    }

    #[test]
    fn angles_need_two_predecessors() {
        let hit_objects = [
            HitObject::circle(Pos::new(0.0, 0.0), 0.0),
            HitObject::circle(Pos::new(100.0, 0.0), 200.0),
            HitObject::circle(Pos::new(100.0, 100.0), 400.0),
            HitObject::circle(Pos::new(0.0, 100.0), 600.0),
        ];

        let diff_objects = create(&hit_objects, 1.0);

        assert!(diff_objects[0].angle.is_none());
        assert!(diff_objects[1].angle.is_none());
        let angle = diff_objects[2].angle.unwrap();
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
