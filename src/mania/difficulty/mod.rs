use crate::{
    any::difficulty::{
        Difficulty,
        skills::{StrainSkill, consistency_factor},
    },
    mania::difficulty::{object::ManiaDifficultyObject, skills::strain::Strain},
    model::beatmap::Beatmap,
};

use super::attributes::ManiaDifficultyAttributes;

pub mod evaluators;
pub mod object;
pub mod skills;

const DIFFICULTY_MULTIPLIER: f64 = 0.018;

pub fn difficulty(
    difficulty: &Difficulty,
    map: &Beatmap,
    clock_rate: f64,
) -> ManiaDifficultyAttributes {
    let DifficultyValues { strain, mut attrs } =
        DifficultyValues::calculate(difficulty, map, clock_rate);

    attrs.strain_factor = consistency_factor(strain.current_strain_peaks());
    attrs.stars = strain.into_difficulty_value() * DIFFICULTY_MULTIPLIER;

    attrs
}

pub struct DifficultyValues {
    pub strain: Strain,
    pub attrs: ManiaDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap, clock_rate: f64) -> Self {
        let take = difficulty.get_passed_objects().min(map.hit_objects.len());
        let hit_objects = &map.hit_objects[..take];

        let total_columns = Self::total_columns(map);
        let map_attrs = map.attributes(difficulty.get_mods(), clock_rate);

        let n_hold_notes = hit_objects.iter().filter(|h| h.is_hold_note()).count();

        let attrs = ManiaDifficultyAttributes {
            n_objects: u32::try_from(take).unwrap_or(u32::MAX),
            n_hold_notes: u32::try_from(n_hold_notes).unwrap_or(u32::MAX),
            great_hit_window: map_attrs.hit_windows.great,
            is_convert: map.is_convert,
            version: ManiaDifficultyAttributes::VERSION,
            ..Default::default()
        };

        let diff_objects = ManiaDifficultyObject::create_all(hit_objects, total_columns, clock_rate);

        let mut strain = Strain::new(total_columns);

        for curr in diff_objects.iter() {
            strain.process(curr, &diff_objects);
        }

        Self { strain, attrs }
    }

    /// Amount of keys, stored as the circle size.
    fn total_columns(map: &Beatmap) -> usize {
        map.cs.round_ties_even().max(1.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use rosu_map::section::general::GameMode;

    use crate::model::hit_object::{HitObject, Pos};

    use super::*;

    fn stairs(n: u32, spacing: f64) -> Beatmap {
        let hit_objects = (0..n)
            .map(|i| {
                let pos = Pos::new(64.0 + 128.0 * (i % 4) as f32, 192.0);
                let time = f64::from(i) * spacing;

                if i % 8 == 0 {
                    HitObject::hold(pos, time, time + 300.0)
                } else {
                    HitObject::circle(pos, time)
                }
            })
            .collect();

        Beatmap::new(GameMode::Mania, hit_objects).with_cs(4.0).with_od(8.0)
    }

    fn calculate(map: &Beatmap, mods: u32) -> ManiaDifficultyAttributes {
        let difficulty = Difficulty::new().mods(mods);
        let clock_rate = difficulty.get_mods().clock_rate();

        super::difficulty(&difficulty, map, clock_rate)
    }

    #[test]
    fn empty_map() {
        let attrs = calculate(&stairs(0, 100.0), 0);

        assert!(attrs.stars.abs() < f64::EPSILON);
        assert_eq!(attrs.n_objects, 0);
        assert_eq!(attrs.n_hold_notes, 0);
    }

    #[test]
    fn counts_objects() {
        let attrs = calculate(&stairs(64, 100.0), 0);

        assert_eq!(attrs.n_objects, 64);
        assert_eq!(attrs.n_hold_notes, 8);
        assert!(attrs.stars > 0.0);
        assert!((0.0..=1.0).contains(&attrs.strain_factor));
    }

    #[test]
    fn faster_is_harder() {
        let slow = calculate(&stairs(200, 150.0), 0);
        let fast = calculate(&stairs(200, 75.0), 0);
        let double_time = calculate(&stairs(200, 150.0), 64);

        assert!(fast.stars > slow.stars);
        assert!(double_time.stars > slow.stars);
    }
}
