use rosu_map::section::general::GameMode;

/// Judgements a score can consist of.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitResult {
    Miss,
    Meh,
    Ok,
    Good,
    Great,
    Perfect,
}

impl HitResult {
    /// How much the judgement is worth when calculating a custom accuracy.
    ///
    /// The best judgement of `mode` is worth [`HitResult::max_weight`].
    pub const fn accuracy_weight(self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Taiko => match self {
                Self::Great | Self::Perfect => 300,
                Self::Ok | Self::Good => 150,
                Self::Meh | Self::Miss => 0,
            },
            GameMode::Mania => match self {
                Self::Perfect => 320,
                Self::Great => 300,
                Self::Good => 200,
                Self::Ok => 100,
                Self::Meh => 50,
                Self::Miss => 0,
            },
            GameMode::Osu | GameMode::Catch => match self {
                Self::Great | Self::Perfect => 300,
                Self::Good => 200,
                Self::Ok => 100,
                Self::Meh => 50,
                Self::Miss => 0,
            },
        }
    }

    /// The weight of the best judgement of `mode`.
    pub const fn max_weight(mode: GameMode) -> u32 {
        Self::Perfect.accuracy_weight(mode)
    }

    /// Custom accuracy of the given `(judgement, count)` pairs.
    ///
    /// Returns `0.0` if there are no judgements.
    pub fn accuracy(mode: GameMode, counts: &[(Self, u32)]) -> f64 {
        let total: u32 = counts.iter().map(|(_, n)| n).sum();

        if total == 0 {
            return 0.0;
        }

        let numerator: u64 = counts
            .iter()
            .map(|&(result, n)| u64::from(result.accuracy_weight(mode)) * u64::from(n))
            .sum();

        let denominator = u64::from(Self::max_weight(mode)) * u64::from(total);

        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mania_weights() {
        let acc = HitResult::accuracy(
            GameMode::Mania,
            &[(HitResult::Perfect, 1), (HitResult::Great, 1)],
        );

        assert!((acc - 620.0 / 640.0).abs() < 1e-12);
    }

    #[test]
    fn taiko_weights() {
        let acc = HitResult::accuracy(GameMode::Taiko, &[(HitResult::Great, 1), (HitResult::Ok, 1)]);

        assert!((acc - 0.75).abs() < 1e-12);
    }

    #[test]
    fn no_judgements() {
        assert!(HitResult::accuracy(GameMode::Mania, &[]).abs() < f64::EPSILON);
    }
}
