use rosu_map::section::general::GameMode;

use crate::{
    mania::{ManiaDifficultyAttributes, ManiaPerformance, ManiaPerformanceAttributes},
    model::{error::CalculateError, mods::GameMods},
    taiko::{TaikoDifficultyAttributes, TaikoPerformance, TaikoPerformanceAttributes},
};

use super::attributes::{DifficultyAttributes, PerformanceAttributes};

/// Performance calculator on maps of any mode.
///
/// # Example
///
/// ```
/// use rosu_rating::{Beatmap, Difficulty, Performance};
/// use rosu_rating::model::{GameMode, hit_object::{HitObject, Pos}};
///
/// let hit_objects = (0..200)
///     .map(|i| HitObject::circle(Pos::default(), f64::from(i) * 120.0).with_rim(i % 3 == 0))
///     .collect();
///
/// let map = Beatmap::new(GameMode::Taiko, hit_objects);
/// let attrs = Difficulty::new().calculate(&map).unwrap();
///
/// let perf = Performance::new(attrs)
///     .unwrap()
///     .misses(2)
///     .calculate();
///
/// println!("PP: {}", perf.pp());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum Performance {
    Taiko(TaikoPerformance),
    Mania(ManiaPerformance),
}

impl Performance {
    /// Create a new performance calculator for the mode of the attributes.
    ///
    /// Fails for modes without a performance calculation.
    pub fn new(attrs: impl Into<DifficultyAttributes>) -> Result<Self, CalculateError> {
        Self::try_from(attrs.into())
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameMods`]
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        match self {
            Self::Taiko(t) => Self::Taiko(t.mods(mods)),
            Self::Mania(m) => Self::Mania(m.mods(mods)),
        }
    }

    /// Specify the amount of misses of a play.
    pub fn misses(self, misses: u32) -> Self {
        match self {
            Self::Taiko(t) => Self::Taiko(t.misses(misses)),
            Self::Mania(m) => Self::Mania(m.misses(misses)),
        }
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(self) -> PerformanceAttributes {
        match self {
            Self::Taiko(t) => PerformanceAttributes::Taiko(t.calculate()),
            Self::Mania(m) => PerformanceAttributes::Mania(m.calculate()),
        }
    }
}

impl TryFrom<DifficultyAttributes> for Performance {
    type Error = CalculateError;

    fn try_from(attrs: DifficultyAttributes) -> Result<Self, Self::Error> {
        match attrs {
            DifficultyAttributes::Osu(_) => Err(CalculateError::UnsupportedMode(GameMode::Osu)),
            DifficultyAttributes::Taiko(attrs) => Ok(Self::Taiko(attrs.performance())),
            DifficultyAttributes::Mania(attrs) => Ok(Self::Mania(attrs.performance())),
        }
    }
}

impl From<PerformanceAttributes> for Performance {
    fn from(attrs: PerformanceAttributes) -> Self {
        match attrs {
            PerformanceAttributes::Taiko(attrs) => Self::Taiko(attrs.performance()),
            PerformanceAttributes::Mania(attrs) => Self::Mania(attrs.performance()),
        }
    }
}

macro_rules! from_mode_performance {
    ( $mode:ident: $performance:ident, $difficulty:ident, $attributes:ident ) => {
        impl From<$performance> for Performance {
            fn from(performance: $performance) -> Self {
                Self::$mode(performance)
            }
        }

        impl From<$difficulty> for Performance {
            fn from(attrs: $difficulty) -> Self {
                Self::$mode(attrs.performance())
            }
        }

        impl From<$attributes> for Performance {
            fn from(attrs: $attributes) -> Self {
                Self::$mode(attrs.performance())
            }
        }
    };
}

from_mode_performance!(
    Taiko: TaikoPerformance,
    TaikoDifficultyAttributes,
    TaikoPerformanceAttributes
);
from_mode_performance!(
    Mania: ManiaPerformance,
    ManiaDifficultyAttributes,
    ManiaPerformanceAttributes
);

#[cfg(test)]
mod tests {
    use crate::osu::OsuDifficultyAttributes;

    use super::*;

    #[test]
    fn osu_has_no_performance() {
        let res = Performance::new(OsuDifficultyAttributes::default());

        assert_eq!(res, Err(CalculateError::UnsupportedMode(GameMode::Osu)));
    }

    #[test]
    fn dispatch() {
        let taiko = Performance::new(TaikoDifficultyAttributes::default());
        let mania = Performance::new(ManiaDifficultyAttributes::default());

        assert!(matches!(taiko, Ok(Performance::Taiko(_))));
        assert!(matches!(mania, Ok(Performance::Mania(_))));
    }

    #[test]
    fn empty_attributes_give_zero_pp() {
        let perf = Performance::from(TaikoDifficultyAttributes::default()).calculate();

        assert!(perf.pp().abs() < f64::EPSILON);
    }
}
