use std::fmt::{Debug, Formatter, Result as FmtResult};

use rosu_mods::{GameModIntermode, GameMods as GameModsLazer, GameModsLegacy};

use crate::model::error::CalculateError;

/// Collection of game mods.
///
/// This type can be created through its `From<T>` implementations where `T`
/// can be
/// - `u32`
/// - [`rosu_mods::GameModsLegacy`]
/// - [`rosu_mods::GameMods`]
///
/// Calculations only ever look at a small set of mods: the rate changing
/// ones, the visibility reducing ones, and the assistance ones. All other
/// mods are ignored.
///
/// # Example
///
/// ```
/// use rosu_rating::model::mods::GameMods;
/// use rosu_mods::{GameModsLegacy, GameMods as GameModsLazer};
///
/// let int = GameMods::from(64 + 8);
/// let legacy = GameMods::from(GameModsLegacy::Hidden | GameModsLegacy::Easy);
/// let lazer = GameMods::from(GameModsLazer::new());
///
/// assert!(int.hd());
/// assert!(legacy.ez());
/// assert!(!lazer.dt());
/// ```
#[derive(Clone, PartialEq)]
pub struct GameMods {
    inner: GameModsInner,
}

impl Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.inner {
            GameModsInner::Lazer(ref mods) => Debug::fmt(mods, f),
            GameModsInner::Legacy(ref mods) => Debug::fmt(mods, f),
        }
    }
}

/// Inner type of [`GameMods`] so that remote types contained in variants don't
/// need to be re-exported.
#[derive(Clone, PartialEq)]
enum GameModsInner {
    Lazer(GameModsLazer),
    Legacy(GameModsLegacy),
}

impl GameMods {
    pub(crate) const DEFAULT: Self = Self {
        inner: GameModsInner::Legacy(GameModsLegacy::NoMod),
    };

    /// Returns the mods' clock rate.
    ///
    /// In case of variable clock rates like for `WindUp`, this will return
    /// `1.0`.
    pub fn clock_rate(&self) -> f64 {
        match self.inner {
            GameModsInner::Lazer(ref mods) => mods.clock_rate().unwrap_or(1.0),
            GameModsInner::Legacy(mods) => mods.clock_rate(),
        }
    }

    /// Resolves the single clock rate of a calculation.
    ///
    /// A custom clock rate takes precedence over the mods' clock rate. Fails
    /// if multiple rate changing mods are active or the resulting clock rate
    /// is not finite and positive.
    pub fn resolve_clock_rate(&self, custom: Option<f64>) -> Result<f64, CalculateError> {
        let rate_mods = [self.dt() || self.nc(), self.ht() || self.dc()];

        if rate_mods.into_iter().filter(|&active| active).count() > 1 {
            return Err(CalculateError::ConflictingRateMods);
        }

        let clock_rate = custom.unwrap_or_else(|| self.clock_rate());

        if clock_rate.is_finite() && clock_rate > 0.0 {
            Ok(clock_rate)
        } else {
            Err(CalculateError::InvalidClockRate(clock_rate))
        }
    }

    /// Multiplier for AR, OD, and HP.
    pub(crate) fn od_ar_hp_multiplier(&self) -> f64 {
        if self.hr() {
            1.4
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }
}

macro_rules! impl_has_mod {
    ( $( $fn:ident: $sign:tt $name:ident [ $s:literal ], )* ) => {
        impl GameMods {
            $(
                #[doc = "Check whether [`GameMods`] contain `"]
                #[doc = $s]
                #[doc = "`."]
                pub fn $fn(&self) -> bool {
                    match self.inner {
                        GameModsInner::Lazer(ref mods) => {
                            mods.contains_intermode(GameModIntermode::$name)
                        },
                        GameModsInner::Legacy(_mods) => {
                            impl_has_mod!(LEGACY $sign $name _mods)
                        },
                    }
                }
            )*
        }
    };

    ( LEGACY + $name:ident $mods:ident ) => {
        $mods.contains(GameModsLegacy::$name)
    };

    ( LEGACY - $name:ident $mods:ident ) => {
        false
    };
}

impl_has_mod! {
    nf: + NoFail ["NoFail"],
    ez: + Easy ["Easy"],
    td: + TouchDevice ["TouchDevice"],
    hd: + Hidden ["Hidden"],
    hr: + HardRock ["HardRock"],
    rx: + Relax ["Relax"],
    fl: + Flashlight ["Flashlight"],
    dt: + DoubleTime ["DoubleTime"],
    nc: + Nightcore ["Nightcore"],
    ht: + HalfTime ["HalfTime"],
    dc: - Daycore ["Daycore"],
    ap: + Autopilot ["Autopilot"],
}

impl Default for GameMods {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<GameModsLazer> for GameMods {
    fn from(mods: GameModsLazer) -> Self {
        Self {
            inner: GameModsInner::Lazer(mods),
        }
    }
}

impl From<GameModsLegacy> for GameMods {
    fn from(mods: GameModsLegacy) -> Self {
        Self {
            inner: GameModsInner::Legacy(mods),
        }
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        GameModsLegacy::from_bits(bits).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_clock_rate() {
        assert!((GameMods::from(64).clock_rate() - 1.5).abs() < f64::EPSILON);
        assert!((GameMods::from(256).clock_rate() - 0.75).abs() < f64::EPSILON);
        assert!((GameMods::default().clock_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn custom_clock_rate_wins() {
        let rate = GameMods::from(64).resolve_clock_rate(Some(2.0)).unwrap();
        assert!((rate - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn conflicting_rate_mods() {
        // DT + HT
        let mods = GameMods::from(64 + 256);

        assert_eq!(
            mods.resolve_clock_rate(None),
            Err(CalculateError::ConflictingRateMods)
        );
    }

    #[test]
    fn nightcore_is_not_a_conflict() {
        // NC implies DT
        let mods = GameMods::from(512 + 64);
        let rate = mods.resolve_clock_rate(None).unwrap();

        assert!((rate - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_clock_rate() {
        let mods = GameMods::default();

        assert!(matches!(
            mods.resolve_clock_rate(Some(0.0)),
            Err(CalculateError::InvalidClockRate(_))
        ));
        assert!(matches!(
            mods.resolve_clock_rate(Some(f64::NAN)),
            Err(CalculateError::InvalidClockRate(_))
        ));
    }

    #[test]
    fn flags() {
        // HD HR FL
        let mods = GameMods::from(8 + 16 + 1024);

        assert!(mods.hd());
        assert!(mods.hr());
        assert!(mods.fl());
        assert!(!mods.ez());
        assert!(!mods.dc());
        assert!((mods.od_ar_hp_multiplier() - 1.4).abs() < f64::EPSILON);
    }
}
