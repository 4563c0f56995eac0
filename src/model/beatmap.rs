use rosu_map::section::general::GameMode;

use crate::{
    model::{error::CalculateError, hit_object::HitObject, mods::GameMods},
    util::difficulty::difficulty_range,
};

/// A chart: its difficulty settings and ordered hit objects.
///
/// Decoding `.osu` files or converting between modes happens elsewhere; the
/// [`Beatmap`] only carries what the calculations need.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    pub mode: GameMode,
    /// Whether the chart was converted from another mode.
    pub is_convert: bool,
    pub ar: f32,
    pub od: f32,
    pub cs: f32,
    pub hp: f32,
    pub slider_multiplier: f64,
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Create a new [`Beatmap`] with all difficulty settings at `5.0`.
    pub const fn new(mode: GameMode, hit_objects: Vec<HitObject>) -> Self {
        Self {
            mode,
            is_convert: false,
            ar: 5.0,
            od: 5.0,
            cs: 5.0,
            hp: 5.0,
            slider_multiplier: 1.4,
            hit_objects,
        }
    }

    /// Specify the approach rate.
    #[must_use]
    pub const fn with_ar(mut self, ar: f32) -> Self {
        self.ar = ar;

        self
    }

    /// Specify the overall difficulty.
    #[must_use]
    pub const fn with_od(mut self, od: f32) -> Self {
        self.od = od;

        self
    }

    /// Specify the circle size, or the amount of keys for osu!mania.
    #[must_use]
    pub const fn with_cs(mut self, cs: f32) -> Self {
        self.cs = cs;

        self
    }

    /// Specify the drain rate.
    #[must_use]
    pub const fn with_hp(mut self, hp: f32) -> Self {
        self.hp = hp;

        self
    }

    /// Specify the base slider velocity.
    #[must_use]
    pub const fn with_slider_multiplier(mut self, slider_multiplier: f64) -> Self {
        self.slider_multiplier = slider_multiplier;

        self
    }

    /// Specify whether the chart was converted from another mode.
    #[must_use]
    pub const fn with_convert(mut self, is_convert: bool) -> Self {
        self.is_convert = is_convert;

        self
    }

    /// Ensure all object times are valid and sorted.
    pub fn check_objects(&self) -> Result<(), CalculateError> {
        let mut prev_start = 0.0;

        for (idx, h) in self.hit_objects.iter().enumerate() {
            for time in [h.start_time, h.end_time()] {
                if time.is_nan() || time < 0.0 {
                    return Err(CalculateError::InvalidTime { idx, time });
                }
            }

            if h.start_time < prev_start {
                return Err(CalculateError::UnsortedObjects { idx });
            }

            prev_start = h.start_time;
        }

        Ok(())
    }

    /// Calculate the [`BeatmapAttributes`] for the given mods and clock
    /// rate.
    pub fn attributes(&self, mods: &GameMods, clock_rate: f64) -> BeatmapAttributes {
        BeatmapAttributes::new(self, mods, clock_rate)
    }
}

/// Summary of a [`Beatmap`]'s difficulty settings after applying mods.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The approach rate after mods and clock rate.
    pub ar: f64,
    /// The overall difficulty after mods and clock rate.
    pub od: f64,
    /// The circle size after mods.
    pub cs: f64,
    /// The drain rate after mods.
    pub hp: f64,
    /// The approach rate after mods but before clock rate.
    pub base_ar: f64,
    pub clock_rate: f64,
    pub hit_windows: HitWindows,
}

/// Hit windows in milliseconds, already adjusted by the clock rate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HitWindows {
    /// Time between an object appearing and its start time.
    pub preempt: f64,
    pub great: f64,
    pub ok: f64,
    pub meh: f64,
}

impl BeatmapAttributes {
    const PREEMPT_MIN: f64 = 450.0;
    const PREEMPT_MID: f64 = 1200.0;
    const PREEMPT_MAX: f64 = 1800.0;

    const OSU_GREAT: [f64; 3] = [80.0, 50.0, 20.0];
    const OSU_OK: [f64; 3] = [140.0, 100.0, 60.0];
    const OSU_MEH: [f64; 3] = [200.0, 150.0, 100.0];

    const TAIKO_GREAT: [f64; 3] = [50.0, 35.0, 20.0];
    const TAIKO_OK: [f64; 3] = [120.0, 80.0, 50.0];

    fn new(map: &Beatmap, mods: &GameMods, clock_rate: f64) -> Self {
        let mod_mult = mods.od_ar_hp_multiplier();

        let base_ar = (f64::from(map.ar) * mod_mult).min(10.0);
        let od = (f64::from(map.od) * mod_mult).min(10.0);
        let hp = (f64::from(map.hp) * mod_mult).min(10.0);

        let cs = if map.mode == GameMode::Mania {
            f64::from(map.cs)
        } else if mods.hr() {
            (f64::from(map.cs) * 1.3).min(10.0)
        } else if mods.ez() {
            f64::from(map.cs) * 0.5
        } else {
            f64::from(map.cs)
        };

        let preempt = Self::preempt(base_ar) / clock_rate;

        let range = |[min, mid, max]: [f64; 3]| difficulty_range(od, min, mid, max) / clock_rate;

        let (great, ok, meh) = match map.mode {
            GameMode::Osu | GameMode::Catch => (
                range(Self::OSU_GREAT),
                range(Self::OSU_OK),
                range(Self::OSU_MEH),
            ),
            GameMode::Taiko => (range(Self::TAIKO_GREAT), range(Self::TAIKO_OK), 0.0),
            GameMode::Mania => (Self::mania_great(map, mods, clock_rate), 0.0, 0.0),
        };

        let ar = if preempt > Self::PREEMPT_MID {
            (Self::PREEMPT_MAX - preempt) / 120.0
        } else {
            (Self::PREEMPT_MID - preempt) / 150.0 + 5.0
        };

        let od = match map.mode {
            GameMode::Osu | GameMode::Catch => (80.0 - great) / 6.0,
            GameMode::Taiko => (50.0 - great) / 3.0,
            GameMode::Mania => od,
        };

        Self {
            ar,
            od,
            cs,
            hp,
            base_ar,
            clock_rate,
            hit_windows: HitWindows {
                preempt,
                great,
                ok,
                meh,
            },
        }
    }

    /// The preempt duration of an approach rate, not adjusted by any clock
    /// rate.
    pub fn preempt(ar: f64) -> f64 {
        difficulty_range(ar, Self::PREEMPT_MAX, Self::PREEMPT_MID, Self::PREEMPT_MIN)
    }

    fn mania_great(map: &Beatmap, mods: &GameMods, clock_rate: f64) -> f64 {
        let od = f64::from(map.od);

        let mut value = if !map.is_convert {
            34.0 + 3.0 * (10.0 - od).clamp(0.0, 10.0)
        } else if od.round_ties_even() > 4.0 {
            34.0
        } else {
            47.0
        };

        if mods.hr() {
            value /= 1.4;
        } else if mods.ez() {
            value *= 1.4;
        }

        ((value * clock_rate).floor() / clock_rate).ceil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(mode: GameMode) -> Beatmap {
        Beatmap::new(mode, Vec::new()).with_ar(9.0).with_od(8.0)
    }

    #[test]
    fn osu_no_mod() {
        let attrs = map(GameMode::Osu).attributes(&GameMods::default(), 1.0);

        assert!((attrs.ar - 9.0).abs() < 1e-9);
        assert!((attrs.od - 8.0).abs() < 1e-9);
        assert!((attrs.hit_windows.preempt - 600.0).abs() < 1e-9);
        assert!((attrs.hit_windows.great - 32.0).abs() < 1e-9);
    }

    #[test]
    fn osu_double_time() {
        let mods = GameMods::from(64);
        let attrs = map(GameMode::Osu).attributes(&mods, mods.clock_rate());

        assert!((attrs.hit_windows.preempt - 400.0).abs() < 1e-9);
        assert!(attrs.ar > 10.0);
        assert!((attrs.base_ar - 9.0).abs() < 1e-9);
    }

    #[test]
    fn hardrock_caps_at_ten() {
        let attrs = map(GameMode::Osu).attributes(&GameMods::from(16), 1.0);

        assert!((attrs.base_ar - 10.0).abs() < 1e-9);
        assert!((attrs.hit_windows.great - 20.0).abs() < 1e-9);
    }

    #[test]
    fn taiko_windows() {
        let attrs = map(GameMode::Taiko).attributes(&GameMods::default(), 1.0);

        assert!((attrs.hit_windows.great - 26.0).abs() < 1e-9);
        assert!((attrs.hit_windows.ok - 62.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_invalid_times() {
        use crate::model::hit_object::Pos;

        let nan = Beatmap::new(
            GameMode::Osu,
            vec![HitObject::circle(Pos::default(), f64::NAN)],
        );
        assert!(matches!(
            nan.check_objects(),
            Err(CalculateError::InvalidTime { idx: 0, .. })
        ));

        let unsorted = Beatmap::new(
            GameMode::Osu,
            vec![
                HitObject::circle(Pos::default(), 100.0),
                HitObject::circle(Pos::default(), 50.0),
            ],
        );
        assert_eq!(
            unsorted.check_objects(),
            Err(CalculateError::UnsortedObjects { idx: 1 })
        );
    }
}
