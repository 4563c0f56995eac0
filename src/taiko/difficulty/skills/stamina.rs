use crate::{
    any::difficulty::{object::IDifficultyObject, skills::strain_decay},
    taiko::difficulty::{evaluators::StaminaEvaluator, object::TaikoDifficultyObject},
    util::difficulty::{logistic_exp, reverse_lerp},
};

define_skill! {
    /// Stamina required to hit fast streams.
    ///
    /// With `single_color` only mono coloured streams are considered.
    #[derive(Clone)]
    pub struct Stamina: StrainSkill => [TaikoDifficultyObject][TaikoDifficultyObject] {
        single_color: bool,
        is_convert: bool,
        current_strain: f64 = 0.0,
    }
}

impl Stamina {
    const SKILL_MULTIPLIER: f64 = 1.1;
    const STRAIN_DECAY_BASE: f64 = 0.4;

    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &TaikoDifficultyObject,
        objects: &[TaikoDifficultyObject],
    ) -> f64 {
        if self.single_color {
            return 0.0;
        }

        let prev_start_time = curr
            .previous(0, objects)
            .map_or(0.0, |prev| prev.start_time);

        self.current_strain * strain_decay(time - prev_start_time, Self::STRAIN_DECAY_BASE)
    }

    fn strain_value_at(
        &mut self,
        curr: &TaikoDifficultyObject,
        objects: &[TaikoDifficultyObject],
    ) -> f64 {
        self.current_strain *= strain_decay(curr.delta_time, Self::STRAIN_DECAY_BASE);

        let mut stamina_difficulty =
            StaminaEvaluator::evaluate_diff_of(curr, objects) * Self::SKILL_MULTIPLIER;

        let streak_idx = curr.mono_streak_idx as f64;

        // Longer same coloured sequences within patterns are harder
        if !self.single_color && !self.is_convert {
            stamina_difficulty *= 1.0 + 0.5 * reverse_lerp(streak_idx, 5.0, 20.0);
        }

        self.current_strain += stamina_difficulty;

        // Converts often consist of long mono streams so their strain is
        // dampened once the streak exceeds 10 notes
        if self.single_color {
            logistic_exp(-(streak_idx - 10.0) / 2.0, Some(self.current_strain))
        } else {
            self.current_strain
        }
    }
}
