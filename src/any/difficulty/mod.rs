use rosu_map::section::general::GameMode;

use crate::{
    mania,
    model::{beatmap::Beatmap, error::CalculateError, mods::GameMods},
    osu, taiko,
};

use super::{attributes::DifficultyAttributes, strains::Strains};

pub mod object;
pub mod skills;

/// Difficulty calculator on maps of any mode.
///
/// # Example
///
/// ```
/// use rosu_rating::{Beatmap, Difficulty};
/// use rosu_rating::model::{GameMode, hit_object::{HitObject, Pos}};
///
/// let hit_objects = (0..64)
///     .map(|i| HitObject::circle(Pos::new((i % 4) as f32 * 120.0, 192.0), f64::from(i) * 150.0))
///     .collect();
///
/// let map = Beatmap::new(GameMode::Osu, hit_objects).with_ar(9.0).with_od(8.0);
///
/// let attrs = Difficulty::new()
///     .mods(8 + 64) // HDDT
///     .calculate(&map)
///     .unwrap();
///
/// println!("Stars: {}", attrs.stars());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameMods,
    passed_objects: Option<u32>,
    /// Clock rate will be validated before usage.
    clock_rate: Option<f64>,
}

impl Difficulty {
    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            mods: GameMods::DEFAULT,
            passed_objects: None,
            clock_rate: None,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameMods`]
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub const fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// The value must be finite and positive, otherwise the calculation will
    /// fail.
    pub const fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.clock_rate = Some(clock_rate);

        self
    }

    /// Perform the difficulty calculation.
    ///
    /// The returned attributes depend on the map's mode.
    pub fn calculate(&self, map: &Beatmap) -> Result<DifficultyAttributes, CalculateError> {
        let res = self.validate(map).and_then(|clock_rate| {
            let attrs = match map.mode {
                GameMode::Osu => osu::difficulty::difficulty(self, map, clock_rate).into(),
                GameMode::Taiko => taiko::difficulty::difficulty(self, map, clock_rate).into(),
                GameMode::Mania => mania::difficulty::difficulty(self, map, clock_rate).into(),
                GameMode::Catch => return Err(CalculateError::UnsupportedMode(map.mode)),
            };

            Ok(attrs)
        });

        #[cfg(feature = "tracing")]
        match res {
            Ok(ref attrs) => tracing::debug!(
                mode = ?map.mode,
                mods = ?self.mods,
                stars = attrs.stars(),
                "calculated difficulty"
            ),
            Err(ref err) => tracing::warn!(mode = ?map.mode, %err, "rejected difficulty calculation"),
        }

        res
    }

    /// Perform the difficulty calculation but instead of evaluating the skill
    /// strains, return them as is.
    ///
    /// Suitable to plot the difficulty of a map over time.
    pub fn strains(&self, map: &Beatmap) -> Result<Strains, CalculateError> {
        let clock_rate = self.validate(map)?;

        let strains = match map.mode {
            GameMode::Osu => osu::strains::strains(self, map, clock_rate).into(),
            GameMode::Taiko => taiko::strains::strains(self, map, clock_rate).into(),
            GameMode::Mania => mania::strains::strains(self, map, clock_rate).into(),
            GameMode::Catch => return Err(CalculateError::UnsupportedMode(map.mode)),
        };

        Ok(strains)
    }

    /// Ensure the input is well-formed and resolve the clock rate.
    fn validate(&self, map: &Beatmap) -> Result<f64, CalculateError> {
        map.check_objects()?;

        self.mods.resolve_clock_rate(self.clock_rate)
    }

    pub const fn get_mods(&self) -> &GameMods {
        &self.mods
    }

    /// Amount of objects that should be considered.
    pub fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::{HitObject, Pos};

    use super::*;

    #[test]
    fn rejects_negative_time() {
        let map = Beatmap::new(
            GameMode::Taiko,
            vec![HitObject::circle(Pos::default(), -1.0)],
        );

        assert!(matches!(
            Difficulty::new().calculate(&map),
            Err(CalculateError::InvalidTime { idx: 0, .. })
        ));
    }

    #[test]
    fn rejects_invalid_clock_rate() {
        let map = Beatmap::new(GameMode::Mania, Vec::new());

        assert!(matches!(
            Difficulty::new().clock_rate(-1.0).calculate(&map),
            Err(CalculateError::InvalidClockRate(_))
        ));
    }

    #[test]
    fn rejects_catch() {
        let map = Beatmap::new(GameMode::Catch, Vec::new());

        assert_eq!(
            Difficulty::new().calculate(&map),
            Err(CalculateError::UnsupportedMode(GameMode::Catch))
        );
    }
}
