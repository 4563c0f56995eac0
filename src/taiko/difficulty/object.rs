use crate::{
    any::difficulty::object::{HasStartTime, IDifficultyObject},
    model::hit_object::HitObject,
};

pub struct TaikoDifficultyObject {
    pub idx: usize,
    pub start_time: f64,
    pub delta_time: f64,
    /// Scroll speed of the note in BPM, scaled by the global slider velocity
    /// and the clock rate.
    pub effective_bpm: f64,
    /// Whether the note has to be hit, i.e. it's neither a drum roll nor a
    /// swell.
    pub is_hit: bool,
    /// Whether the previous object has to be hit.
    pub last_is_hit: bool,
    pub is_rim: bool,
    /// Index of the previous hit of the same colour.
    pub prev_mono_idx: Option<usize>,
    /// Position within the current streak of same coloured hits.
    pub mono_streak_idx: usize,
    /// Start time of the first note of the current mono streak if a
    /// differently coloured hit came before it.
    pub last_color_change_time: Option<f64>,
    /// Start time of the first note of the next mono streak.
    pub next_color_change_time: Option<f64>,
}

impl TaikoDifficultyObject {
    /// Turn the hit objects into difficulty objects.
    ///
    /// The first hit object has no difficulty object.
    pub fn create_all(
        hit_objects: &[HitObject],
        global_slider_velocity: f64,
        clock_rate: f64,
    ) -> Vec<Self> {
        let mut diff_objects: Vec<Self> = Vec::with_capacity(hit_objects.len().saturating_sub(1));

        // Most recent hit, regardless of its colour
        let mut last_hit: Option<usize> = None;
        // Most recent hit of each colour; centre at 0, rim at 1
        let mut last_mono = [None; 2];

        let pairs = hit_objects.iter().zip(hit_objects.iter().skip(1));

        for (idx, (last, h)) in pairs.enumerate() {
            let start_time = h.start_time / clock_rate;
            let delta_time = start_time - last.start_time / clock_rate;
            let effective_bpm = h.scroll_bpm * global_slider_velocity * clock_rate;

            let mut diff_object = Self {
                idx,
                start_time,
                delta_time,
                effective_bpm,
                is_hit: !h.is_spinner(),
                last_is_hit: !last.is_spinner(),
                is_rim: h.is_rim,
                prev_mono_idx: None,
                mono_streak_idx: 0,
                last_color_change_time: None,
                next_color_change_time: None,
            };

            if diff_object.is_hit {
                let color = usize::from(h.is_rim);
                diff_object.prev_mono_idx = last_mono[color];

                match last_hit.and_then(|i| diff_objects.get(i)) {
                    Some(prev) if prev.is_rim == diff_object.is_rim => {
                        diff_object.mono_streak_idx = prev.mono_streak_idx + 1;
                        diff_object.last_color_change_time = prev.last_color_change_time;
                    }
                    Some(_) => diff_object.last_color_change_time = Some(start_time),
                    None => {}
                }

                last_hit = Some(idx);
                last_mono[color] = Some(idx);
            }

            diff_objects.push(diff_object);
        }

        let mut next_hit: Option<(bool, f64)> = None;
        let mut next_color_change_time = None;

        for diff_object in diff_objects.iter_mut().rev().filter(|h| h.is_hit) {
            let next_change = next_hit.filter(|&(is_rim, _)| is_rim != diff_object.is_rim);

            if let Some((_, start_time)) = next_change {
                next_color_change_time = Some(start_time);
            }

            diff_object.next_color_change_time = next_color_change_time;
            next_hit = Some((diff_object.is_rim, diff_object.start_time));
        }

        diff_objects
    }

    /// Whether evaluators should rate this object, i.e. both this and the
    /// previous object have to be hit.
    pub const fn is_evaluable(&self) -> bool {
        self.is_hit && self.last_is_hit
    }

    /// The `n`-th previous hit of the same colour, if there are that many.
    pub fn previous_mono<'a>(&self, n: usize, diff_objects: &'a [Self]) -> Option<&'a Self> {
        let mut curr = diff_objects.get(self.prev_mono_idx?)?;

        for _ in 0..n {
            curr = diff_objects.get(curr.prev_mono_idx?)?;
        }

        Some(curr)
    }
}

impl IDifficultyObject for TaikoDifficultyObject {
    type DifficultyObjects = [Self];

    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for TaikoDifficultyObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::Pos;

    use super::*;

    fn note(time: f64, is_rim: bool) -> HitObject {
        HitObject::circle(Pos::default(), time).with_rim(is_rim)
    }

    #[test]
    fn mono_streaks() {
        // d d d k k d
        let hit_objects = vec![
            note(0.0, false),
            note(100.0, false),
            note(200.0, false),
            note(300.0, true),
            note(400.0, true),
            note(500.0, false),
        ];

        let diff_objects = TaikoDifficultyObject::create_all(&hit_objects, 1.4, 1.0);

        assert_eq!(diff_objects.len(), 5);
        assert_eq!(diff_objects[0].mono_streak_idx, 0);
        assert_eq!(diff_objects[1].mono_streak_idx, 1);
        assert!(diff_objects[1].last_color_change_time.is_none());
        assert_eq!(diff_objects[2].mono_streak_idx, 0);
        assert_eq!(diff_objects[3].mono_streak_idx, 1);
        assert_eq!(diff_objects[3].last_color_change_time, Some(300.0));
        assert_eq!(diff_objects[4].prev_mono_idx, Some(1));
        assert_eq!(diff_objects[4].last_color_change_time, Some(500.0));

        assert_eq!(diff_objects[0].next_color_change_time, Some(300.0));
        assert_eq!(diff_objects[1].next_color_change_time, Some(300.0));
        assert_eq!(diff_objects[2].next_color_change_time, Some(500.0));
        assert_eq!(diff_objects[3].next_color_change_time, Some(500.0));
        assert!(diff_objects[4].next_color_change_time.is_none());
    }

    #[test]
    fn drum_rolls_have_no_colour() {
        let hit_objects = vec![
            note(0.0, false),
            note(100.0, false),
            HitObject::spinner(Pos::default(), 200.0, 600.0),
            note(700.0, false),
        ];

        let diff_objects = TaikoDifficultyObject::create_all(&hit_objects, 1.4, 1.0);

        assert!(!diff_objects[1].is_hit);
        assert!(!diff_objects[2].last_is_hit);
        assert!(!diff_objects[2].is_evaluable());
        assert!(diff_objects[0].is_evaluable());
        assert_eq!(diff_objects[2].prev_mono_idx, Some(0));
        assert_eq!(diff_objects[2].mono_streak_idx, 1);
    }

    #[test]
    fn previous_mono_runs_out() {
        let hit_objects: Vec<_> = (0..4).map(|i| note(f64::from(i) * 100.0, false)).collect();
        let diff_objects = TaikoDifficultyObject::create_all(&hit_objects, 1.4, 1.0);
        let last = &diff_objects[2];

        assert_eq!(last.previous_mono(0, &diff_objects).map(|h| h.idx), Some(1));
        assert_eq!(last.previous_mono(1, &diff_objects).map(|h| h.idx), Some(0));
        assert!(last.previous_mono(2, &diff_objects).is_none());
        assert!(last.previous_mono(7, &diff_objects).is_none());
        assert!(diff_objects[0].previous_mono(0, &diff_objects).is_none());
    }

    #[test]
    fn timing_is_rate_adjusted() {
        let hit_objects = vec![note(0.0, false), note(150.0, false)];
        let diff_objects = TaikoDifficultyObject::create_all(&hit_objects, 1.0, 1.5);

        assert!((diff_objects[0].delta_time - 100.0).abs() < 1e-9);
        assert!((diff_objects[0].effective_bpm - 180.0).abs() < 1e-9);
    }
}
