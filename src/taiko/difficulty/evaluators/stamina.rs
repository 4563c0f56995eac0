use crate::{
    any::difficulty::object::IDifficultyObject,
    taiko::difficulty::object::TaikoDifficultyObject,
};

pub struct StaminaEvaluator;

impl StaminaEvaluator {
    /// Evaluates the minimum mechanical stamina required to play the current
    /// note.
    pub fn evaluate_diff_of(curr: &TaikoDifficultyObject, objects: &[TaikoDifficultyObject]) -> f64 {
        if !curr.is_evaluable() {
            return 0.0;
        }

        // Find the previous hit object hit by the current finger, which is n
        // notes prior, n being the number of available fingers
        let prev = curr.previous(1, objects);
        let prev_mono = curr.previous_mono(Self::available_fingers_for(curr) - 1, objects);

        // Add a base strain to all objects
        let mut object_strain = 0.5;

        let Some(prev) = prev else {
            return object_strain;
        };

        if let Some(prev_mono) = prev_mono {
            object_strain += Self::speed_bonus(curr.start_time - prev_mono.start_time)
                + 0.5 * Self::speed_bonus(curr.start_time - prev.start_time);
        }

        object_strain
    }

    fn available_fingers_for(hit_object: &TaikoDifficultyObject) -> usize {
        if hit_object
            .last_color_change_time
            .is_some_and(|time| hit_object.start_time - time < 300.0)
        {
            return 2;
        }

        if hit_object
            .next_color_change_time
            .is_some_and(|time| time - hit_object.start_time < 300.0)
        {
            return 2;
        }

        8
    }

    fn speed_bonus(interval: f64) -> f64 {
        // Capped to prevent infinite values
        20.0 / interval.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::{HitObject, Pos};

    use super::*;

    fn note(time: f64, is_rim: bool) -> HitObject {
        HitObject::circle(Pos::default(), time).with_rim(is_rim)
    }

    #[test]
    fn first_note_gets_base_strain() {
        let hit_objects: Vec<_> = (0..2)
            .map(|i| HitObject::circle(Pos::default(), f64::from(i) * 100.0))
            .collect();

        let diff_objects = TaikoDifficultyObject::create_all(&hit_objects, 1.4, 1.0);

        let value = StaminaEvaluator::evaluate_diff_of(&diff_objects[0], &diff_objects);
        assert!((value - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn faster_streams_are_harder() {
        let stream = |spacing: f64| {
            let hit_objects: Vec<_> = (0..16)
                .map(|i| HitObject::circle(Pos::default(), f64::from(i) * spacing))
                .collect();

            let diff_objects = TaikoDifficultyObject::create_all(&hit_objects, 1.4, 1.0);
            let last = &diff_objects[diff_objects.len() - 1];

            StaminaEvaluator::evaluate_diff_of(last, &diff_objects)
        };

        assert!(stream(60.0) > stream(120.0));
    }

    #[test]
    fn short_mono_history_gets_no_bonus() {
        let hit_objects: Vec<_> = (0..4).map(|i| note(f64::from(i) * 100.0, false)).collect();
        let diff_objects = TaikoDifficultyObject::create_all(&hit_objects, 1.4, 1.0);

        let value = StaminaEvaluator::evaluate_diff_of(&diff_objects[2], &diff_objects);
        assert!((value - 0.5).abs() < 1e-9);
    }

    #[test]
    fn upcoming_color_change_limits_fingers() {
        // Eleven dons followed by a kat
        let hit_objects: Vec<_> = (0..12)
            .map(|i| note(f64::from(i) * 100.0, i == 11))
            .collect();

        let diff_objects = TaikoDifficultyObject::create_all(&hit_objects, 1.4, 1.0);

        // 600 ms before the kat so eight fingers and too few previous dons
        let far = StaminaEvaluator::evaluate_diff_of(&diff_objects[4], &diff_objects);
        assert!((far - 0.5).abs() < 1e-9);

        // 100 ms before the kat so two fingers: 0.5 + 20 / 200 + 0.5 * 20 / 200
        let near = StaminaEvaluator::evaluate_diff_of(&diff_objects[9], &diff_objects);
        assert!((near - 0.65).abs() < 1e-9);
    }

    #[test]
    fn note_after_drum_roll_is_exempt() {
        let hit_objects = vec![
            note(0.0, false),
            note(100.0, false),
            HitObject::spinner(Pos::default(), 200.0, 600.0),
            note(700.0, false),
        ];

        let diff_objects = TaikoDifficultyObject::create_all(&hit_objects, 1.4, 1.0);

        let value = StaminaEvaluator::evaluate_diff_of(&diff_objects[2], &diff_objects);
        assert!(value.abs() < f64::EPSILON);
    }
}
