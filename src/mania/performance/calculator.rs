use crate::{
    mania::{ManiaDifficultyAttributes, ManiaPerformanceAttributes, ManiaScoreState},
    model::mods::GameMods,
};

pub(super) struct ManiaPerformanceCalculator<'mods> {
    attrs: ManiaDifficultyAttributes,
    mods: &'mods GameMods,
    state: ManiaScoreState,
}

impl<'a> ManiaPerformanceCalculator<'a> {
    pub const fn new(
        attrs: ManiaDifficultyAttributes,
        mods: &'a GameMods,
        state: ManiaScoreState,
    ) -> Self {
        Self { attrs, mods, state }
    }
}

impl ManiaPerformanceCalculator<'_> {
    /// Spikes weigh fully towards the length bonus.
    const HARD_HIT_MULTIPLIER: f64 = 1.0;
    /// Filler weighs half towards the length bonus.
    const EASY_HIT_MULTIPLIER: f64 = 0.5;

    pub fn calculate(self) -> ManiaPerformanceAttributes {
        let mut multiplier = 1.0;

        if self.mods.nf() {
            multiplier *= 0.75;
        }

        if self.mods.ez() {
            multiplier *= 0.5;
        }

        let difficulty_value = self.compute_difficulty_value();
        let pp = difficulty_value * multiplier;

        ManiaPerformanceAttributes {
            difficulty: self.attrs,
            pp,
            pp_difficulty: difficulty_value,
        }
    }

    fn compute_difficulty_value(&self) -> f64 {
        // Star rating to pp curve
        let mut difficulty_value =
            8.0 * f64::max(self.attrs.stars - 0.15, 0.05).powf(2.2);

        let (hard_length_bonus, easy_length_bonus) =
            self.base_length_bonus(difficulty_value, self.attrs.strain_factor);

        difficulty_value += (hard_length_bonus + easy_length_bonus) / 2.0;

        difficulty_value * f64::max(0.0, 5.0 * self.state.accuracy() - 4.0)
    }

    /// Length bonus of the hard and the easy portion of all hits.
    fn base_length_bonus(&self, base_pp: f64, difficulty_factor: f64) -> (f64, f64) {
        let total_hits = f64::from(self.state.total_hits());

        let hard_hits = total_hits * difficulty_factor;
        let easy_hits = total_hits - hard_hits;

        let hard_length_bonus = base_pp * 0.0001 * Self::HARD_HIT_MULTIPLIER * hard_hits;
        let easy_length_bonus = base_pp * 0.0001 * Self::EASY_HIT_MULTIPLIER * easy_hits;

        (hard_length_bonus, easy_length_bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> ManiaDifficultyAttributes {
        ManiaDifficultyAttributes {
            stars: 4.0,
            strain_factor: 0.5,
            great_hit_window: 40.0,
            n_objects: 1000,
            n_hold_notes: 0,
            is_convert: false,
            version: ManiaDifficultyAttributes::VERSION,
        }
    }

    fn calculate(mods: u32, state: ManiaScoreState) -> ManiaPerformanceAttributes {
        let mods = GameMods::from(mods);

        ManiaPerformanceCalculator::new(attrs(), &mods, state).calculate()
    }

    fn ss() -> ManiaScoreState {
        ManiaScoreState {
            n320: 1000,
            ..ManiaScoreState::new()
        }
    }

    #[test]
    fn perfect_play() {
        let perf = calculate(0, ss());

        let base = 8.0 * 3.85_f64.powf(2.2);
        // 500 hard hits at full weight, 500 easy hits at half weight
        let expected = base + (base * 0.0001 * 500.0 + base * 0.0001 * 0.5 * 500.0) / 2.0;

        assert!((perf.pp - expected).abs() < 1e-9);
    }

    #[test]
    fn low_accuracy_gives_no_pp() {
        let state = ManiaScoreState {
            n320: 500,
            n50: 500,
            ..ManiaScoreState::new()
        };

        assert!(calculate(0, state).pp.abs() < f64::EPSILON);
    }

    #[test]
    fn mod_multipliers() {
        let nomod = calculate(0, ss());
        let no_fail = calculate(1, ss());
        let easy = calculate(2, ss());

        assert!((no_fail.pp - nomod.pp * 0.75).abs() < 1e-9);
        assert!((easy.pp - nomod.pp * 0.5).abs() < 1e-9);
    }
}
