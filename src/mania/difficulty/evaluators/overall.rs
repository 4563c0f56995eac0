use crate::{mania::difficulty::object::ManiaDifficultyObject, util::difficulty::logistic};

pub struct OverallStrainEvaluator;

impl OverallStrainEvaluator {
    const RELEASE_THRESHOLD: f64 = 30.0;

    pub fn evaluate_diff_of(curr: &ManiaDifficultyObject, objects: &[ManiaDifficultyObject]) -> f64 {
        let start_time = curr.start_time;
        let end_time = curr.end_time;
        let mut is_overlapping = false;

        // Lowest value we can assume with the current information
        let mut closest_end_time = (end_time - start_time).abs();
        // Factor to all additional strains in case something else is held
        let mut hold_factor = 1.0;
        // Addition to the current note in case it's a hold and has to be
        // released awkwardly
        let mut hold_addition = 0.0;

        for prev in curr.prev_hit_objects(objects) {
            // The current note is overlapped if a previous note or end is
            // overlapping the current note body
            is_overlapping |= prev.end_time > start_time + 1.0
                && end_time > prev.end_time + 1.0
                && start_time > prev.start_time + 1.0;

            if prev.end_time > end_time + 1.0 && start_time > prev.start_time + 1.0 {
                hold_factor = 1.25;
            }

            closest_end_time = closest_end_time.min((end_time - prev.end_time).abs());
        }

        // Releasing multiple notes at once is as easy as releasing one so
        // the addition is halved if the closest release is
        // `RELEASE_THRESHOLD` away
        if is_overlapping {
            hold_addition = logistic(closest_end_time, Self::RELEASE_THRESHOLD, 0.27, None);
        }

        (1.0 + hold_addition) * hold_factor
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::{HitObject, Pos};

    use super::*;

    #[test]
    fn held_notes_are_harder() {
        let column = |i: f32| Pos::new(64.0 + 128.0 * i, 192.0);

        let plain = vec![
            HitObject::circle(column(0.0), 0.0),
            HitObject::circle(column(1.0), 100.0),
            HitObject::circle(column(2.0), 200.0),
        ];

        let held = vec![
            HitObject::circle(column(0.0), 0.0),
            HitObject::hold(column(1.0), 100.0, 1000.0),
            HitObject::circle(column(2.0), 200.0),
        ];

        let eval = |hit_objects: &[HitObject]| {
            let diff_objects = ManiaDifficultyObject::create_all(hit_objects, 4, 1.0);

            OverallStrainEvaluator::evaluate_diff_of(&diff_objects[1], &diff_objects)
        };

        assert!((eval(&plain) - 1.0).abs() < f64::EPSILON);
        assert!((eval(&held) - 1.25).abs() < f64::EPSILON);
    }
}
