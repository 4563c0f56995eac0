use crate::{
    any::difficulty::{
        object::{HasStartTime, IDifficultyObject},
        skills::strain_decay,
    },
    osu::difficulty::{evaluators::AimEvaluator, object::OsuDifficultyObject},
    util::difficulty::logistic,
};

define_skill! {
    /// Cursor movement between objects.
    ///
    /// Without sliders, travel along slider bodies is ignored which makes the
    /// ratio of both variants a measure of how much sliders contribute.
    #[derive(Clone)]
    pub struct Aim: StrainSkill => [OsuDifficultyObject<'a>][OsuDifficultyObject<'a>] {
        include_sliders: bool,
        current_strain: f64 = 0.0,
        slider_strains: Vec<f64> = Vec::new(),
    }
}

impl Aim {
    const SKILL_MULTIPLIER: f64 = 26.0;
    const STRAIN_DECAY_BASE: f64 = 0.15;

    fn calculate_initial_strain(
        &mut self,
        time: f64,
        curr: &OsuDifficultyObject<'_>,
        objects: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        let elapsed = curr
            .previous(0, objects)
            .map_or(time, |prev| time - prev.start_time());

        self.current_strain * strain_decay(elapsed, Self::STRAIN_DECAY_BASE)
    }

    fn strain_value_at(
        &mut self,
        curr: &OsuDifficultyObject<'_>,
        objects: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        let difficulty = AimEvaluator::evaluate_diff_of(curr, objects, self.include_sliders);

        self.current_strain = self.current_strain
            * strain_decay(curr.delta_time, Self::STRAIN_DECAY_BASE)
            + difficulty * Self::SKILL_MULTIPLIER;

        if curr.base.is_slider() {
            self.slider_strains.push(self.current_strain);
        }

        self.current_strain
    }

    /// Amount of sliders weighted by their strain relative to the hardest
    /// slider.
    pub fn get_difficult_sliders(&self) -> f64 {
        let hardest = self.slider_strains.iter().copied().fold(0.0, f64::max);

        if hardest <= 0.0 {
            return 0.0;
        }

        self.slider_strains
            .iter()
            .map(|strain| logistic(strain / hardest, 0.5, 12.0, None))
            .sum()
    }
}
