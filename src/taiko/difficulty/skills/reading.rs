use crate::taiko::difficulty::{evaluators::ReadingEvaluator, object::TaikoDifficultyObject};

define_skill! {
    #[derive(Clone)]
    pub struct Reading: StrainDecaySkill => [TaikoDifficultyObject][TaikoDifficultyObject] {}
}

impl Reading {
    const SKILL_MULTIPLIER: f64 = 1.0;
    const STRAIN_DECAY_BASE: f64 = 0.4;

    #[allow(clippy::unused_self)]
    fn strain_value_of(&self, curr: &TaikoDifficultyObject, _: &[TaikoDifficultyObject]) -> f64 {
        ReadingEvaluator::evaluate_diff_of(curr)
    }
}
