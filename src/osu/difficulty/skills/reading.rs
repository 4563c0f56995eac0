use crate::osu::difficulty::{
    evaluators::{ReadingContext, ReadingEvaluator},
    object::OsuDifficultyObject,
};

define_skill! {
    /// Visual density of the chart, i.e. how hard it is to read.
    #[derive(Clone)]
    pub struct Reading: StrainDecaySkill => [OsuDifficultyObject<'a>][OsuDifficultyObject<'a>] {
        context: ReadingContext,
    }
}

impl Reading {
    const SKILL_MULTIPLIER: f64 = 1.0;
    const STRAIN_DECAY_BASE: f64 = 0.15;

    fn strain_value_of(
        &self,
        curr: &OsuDifficultyObject<'_>,
        _: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        ReadingEvaluator::evaluate_diff_of(curr, &self.context)
    }
}
