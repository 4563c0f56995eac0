use std::f64::consts::SQRT_2;

use crate::{
    model::mods::GameMods,
    taiko::{TaikoDifficultyAttributes, TaikoPerformanceAttributes, TaikoScoreState},
    util::difficulty::{deviation_upper_bound, erf, norm},
};

pub(super) struct TaikoPerformanceCalculator<'mods> {
    attrs: TaikoDifficultyAttributes,
    mods: &'mods GameMods,
    state: TaikoScoreState,
}

impl<'a> TaikoPerformanceCalculator<'a> {
    pub const fn new(
        attrs: TaikoDifficultyAttributes,
        mods: &'a GameMods,
        state: TaikoScoreState,
    ) -> Self {
        Self { attrs, mods, state }
    }
}

impl TaikoPerformanceCalculator<'_> {
    pub fn calculate(self) -> TaikoPerformanceAttributes {
        // Alters the value of the pp to match the other modes
        let mut multiplier = 1.13;

        if self.mods.hd() && !self.attrs.is_convert {
            multiplier *= 1.075;
        }

        if self.mods.ez() {
            multiplier *= 0.95;
        }

        let successful_hits = self.state.successful_hits();

        let effective_miss_count = if successful_hits > 0 {
            f64::max(1.0, 1000.0 / f64::from(successful_hits)) * f64::from(self.state.misses)
        } else {
            0.0
        };

        let estimated_unstable_rate = deviation_upper_bound(
            self.state.n300,
            self.state.total_hits(),
            self.attrs.great_hit_window,
        )
        .map(|deviation| deviation * 10.0);

        let difficulty_value =
            self.compute_difficulty_value(effective_miss_count, estimated_unstable_rate);
        let accuracy_value = self.compute_accuracy_value(estimated_unstable_rate);

        let pp = norm(1.1, [difficulty_value, accuracy_value]) * multiplier;

        TaikoPerformanceAttributes {
            difficulty: self.attrs,
            pp,
            pp_acc: accuracy_value,
            pp_difficulty: difficulty_value,
            effective_miss_count,
            estimated_unstable_rate,
        }
    }

    fn compute_difficulty_value(
        &self,
        effective_miss_count: f64,
        estimated_unstable_rate: Option<f64>,
    ) -> f64 {
        let Some(estimated_unstable_rate) = estimated_unstable_rate else {
            return 0.0;
        };

        let attrs = &self.attrs;

        let base_difficulty = 5.0 * f64::max(1.0, attrs.stars / 0.115) - 4.0;

        let mut difficulty_value = f64::min(
            f64::powf(base_difficulty, 3.0) / 69_052.51,
            f64::powf(base_difficulty, 2.25) / 1150.0,
        );

        let length_bonus = 1.0 + 0.1 * f64::min(1.0, self.total_hits() / 1500.0);
        difficulty_value *= length_bonus;

        difficulty_value *= f64::powf(0.986, effective_miss_count);

        if self.mods.ez() {
            difficulty_value *= 0.9;
        }

        if self.mods.hd() {
            difficulty_value *= 1.025;
        }

        if self.mods.fl() {
            difficulty_value *= f64::max(
                1.0,
                1.05 - f64::min(attrs.mono_stamina_factor / 50.0, 1.0) * length_bonus,
            );
        }

        // Scale accuracy more harshly on nearly-completely mono (single
        // coloured) speed maps
        let mono_acc_scaling_exponent = 2.0 + attrs.mono_stamina_factor;
        let mono_acc_scaling_shift = 400.0 - 100.0 * attrs.mono_stamina_factor;

        let acc_scaling = erf(mono_acc_scaling_shift / (SQRT_2 * estimated_unstable_rate)).max(0.0);

        difficulty_value * acc_scaling.powf(mono_acc_scaling_exponent)
    }

    fn compute_accuracy_value(&self, estimated_unstable_rate: Option<f64>) -> f64 {
        if self.attrs.great_hit_window <= 0.0 {
            return 0.0;
        }

        let Some(estimated_unstable_rate) = estimated_unstable_rate else {
            return 0.0;
        };

        let mut accuracy_value = f64::powf(70.0 / estimated_unstable_rate, 1.1)
            * f64::powf(self.attrs.stars, 0.4)
            * 100.0;

        let length_bonus = f64::min(1.15, f64::powf(self.total_hits() / 1500.0, 0.3));

        // Slight HDFL bonus for accuracy
        if self.mods.fl() && self.mods.hd() && !self.attrs.is_convert {
            accuracy_value *= f64::max(1.0, 1.05 * length_bonus);
        }

        accuracy_value
    }

    fn total_hits(&self) -> f64 {
        f64::from(self.state.total_hits())
    }
}
