use crate::osu::difficulty::{evaluators::RhythmEvaluator, object::OsuDifficultyObject};

define_skill! {
    /// Rhythm complexity on its own, without the tapping speed.
    #[derive(Clone)]
    pub struct Rhythm: StrainDecaySkill => [OsuDifficultyObject<'a>][OsuDifficultyObject<'a>] {
        hit_window: f64,
    }
}

impl Rhythm {
    const SKILL_MULTIPLIER: f64 = 1.0;
    const STRAIN_DECAY_BASE: f64 = 0.3;

    fn strain_value_of(
        &self,
        curr: &OsuDifficultyObject<'_>,
        objects: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        RhythmEvaluator::evaluate_diff_of(curr, objects, self.hit_window)
    }
}
