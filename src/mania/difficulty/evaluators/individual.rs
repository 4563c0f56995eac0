use crate::mania::difficulty::object::ManiaDifficultyObject;

pub struct IndividualStrainEvaluator;

impl IndividualStrainEvaluator {
    pub fn evaluate_diff_of(curr: &ManiaDifficultyObject, objects: &[ManiaDifficultyObject]) -> f64 {
        let start_time = curr.start_time;
        let end_time = curr.end_time;

        // Bonus if this note starts and ends before the end of another hold
        // note
        let with_bonus = curr.prev_hit_objects(objects).any(|prev| {
            prev.end_time > end_time + 1.0 && start_time > prev.start_time + 1.0
        });

        let hold_factor = if with_bonus { 1.25 } else { 1.0 };

        2.0 * hold_factor
    }
}
