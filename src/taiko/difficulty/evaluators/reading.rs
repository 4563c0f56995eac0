use crate::{taiko::difficulty::object::TaikoDifficultyObject, util::difficulty::logistic};

pub struct ReadingEvaluator;

impl ReadingEvaluator {
    /// Evaluates the influence of the scroll speed and the note density on
    /// the difficulty of reading a note.
    pub fn evaluate_diff_of(note_object: &TaikoDifficultyObject) -> f64 {
        // Drum rolls and swells are exempt, as is the note right after them
        if !note_object.is_evaluable() {
            return 0.0;
        }

        let high_velocity = VelocityRange::new(270.0, 550.0);

        // Cap to prevent outlier values on maps that exceed the editor's
        // parameters
        let effective_bpm = f64::max(1.0, note_object.effective_bpm);

        // Delta time this note would need to be spaced equally to a base
        // slider velocity 1/4 note
        let expected_delta_time = 21_000.0 / effective_bpm;
        let density = expected_delta_time / f64::max(1.0, note_object.delta_time);

        // Dense notes are penalized and very dense notes are rewarded
        let high_density_penalty = logistic(density, 1.0, 9.0, None);
        let very_high_density_bonus = logistic(density, 4.0, 4.0, None);

        let midpoint = high_velocity.center() / (1.0 + 9.0 * very_high_density_bonus);
        let multiplier = 5.0
            * (1.0 - 0.45 * high_density_penalty)
            * (1.0 + 2.0 * very_high_density_bonus)
            / high_velocity.range();

        let reading_difficulty = logistic(effective_bpm, midpoint, multiplier, None)
            .powf(2.5 + 2.0 * high_density_penalty)
            * (1.0 - 0.75 * very_high_density_bonus)
            + 0.75 * very_high_density_bonus;

        reading_difficulty * 1.5
    }
}

struct VelocityRange {
    min: f64,
    max: f64,
}

impl VelocityRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    const fn center(&self) -> f64 {
        (self.max + self.min) / 2.0
    }

    const fn range(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(effective_bpm: f64, delta_time: f64) -> TaikoDifficultyObject {
        TaikoDifficultyObject {
            idx: 1,
            start_time: 1000.0,
            delta_time,
            effective_bpm,
            is_hit: true,
            last_is_hit: true,
            is_rim: false,
            prev_mono_idx: None,
            mono_streak_idx: 0,
            last_color_change_time: None,
            next_color_change_time: None,
        }
    }

    #[test]
    fn faster_scroll_is_harder() {
        let slow = ReadingEvaluator::evaluate_diff_of(&note(150.0, 150.0));
        let fast = ReadingEvaluator::evaluate_diff_of(&note(500.0, 150.0));

        assert!(fast > slow);
        assert!(fast <= 1.5);
    }

    #[test]
    fn drum_rolls_are_exempt() {
        let mut drum_roll = note(500.0, 150.0);
        drum_roll.is_hit = false;

        assert!(ReadingEvaluator::evaluate_diff_of(&drum_roll).abs() < f64::EPSILON);
    }

    #[test]
    fn note_after_drum_roll_is_exempt() {
        use crate::model::hit_object::{HitObject, Pos};

        let hit_objects = vec![
            HitObject::circle(Pos::default(), 0.0),
            HitObject::circle(Pos::default(), 100.0),
            HitObject::spinner(Pos::default(), 200.0, 600.0),
            HitObject::circle(Pos::default(), 700.0),
        ];

        let diff_objects = TaikoDifficultyObject::create_all(&hit_objects, 1.4, 1.0);

        assert!(ReadingEvaluator::evaluate_diff_of(&diff_objects[0]) > 0.0);
        assert!(ReadingEvaluator::evaluate_diff_of(&diff_objects[2]).abs() < f64::EPSILON);
    }
}
