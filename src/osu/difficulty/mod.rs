use crate::{
    any::difficulty::{
        Difficulty,
        skills::{StrainSkill, consistency_factor},
    },
    model::{beatmap::Beatmap, hit_object::HitObjectKind, mods::GameMods},
    util::difficulty::norm,
};

use self::{
    evaluators::ReadingContext, object::OsuDifficultyObject, scaling_factor::ScalingFactor,
    skills::OsuSkills,
};

use super::attributes::OsuDifficultyAttributes;

pub mod evaluators;
pub mod object;
pub mod scaling_factor;
pub mod skills;

const DIFFICULTY_MULTIPLIER: f64 = 0.0675;
const STAR_RATING_MULTIPLIER: f64 = 0.027;
const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.15;

pub fn difficulty(
    difficulty: &Difficulty,
    map: &Beatmap,
    clock_rate: f64,
) -> OsuDifficultyAttributes {
    let DifficultyValues { skills, mut attrs } =
        DifficultyValues::calculate(difficulty, map, clock_rate);

    DifficultyValues::eval(&mut attrs, difficulty.get_mods(), &skills);

    attrs
}

pub struct DifficultyValues {
    pub skills: OsuSkills,
    pub attrs: OsuDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap, clock_rate: f64) -> Self {
        let mods = difficulty.get_mods();
        let take = difficulty.get_passed_objects().min(map.hit_objects.len());
        let hit_objects = &map.hit_objects[..take];

        let map_attrs = map.attributes(mods, clock_rate);
        let scaling_factor = ScalingFactor::new(map_attrs.cs);

        let mut attrs = OsuDifficultyAttributes {
            ar: map_attrs.ar,
            od: map_attrs.od,
            hp: map_attrs.hp,
            great_hit_window: map_attrs.hit_windows.great,
            ok_hit_window: map_attrs.hit_windows.ok,
            meh_hit_window: map_attrs.hit_windows.meh,
            version: OsuDifficultyAttributes::VERSION,
            ..Default::default()
        };

        for h in hit_objects {
            match h.kind {
                HitObjectKind::Circle | HitObjectKind::Hold(_) => attrs.n_circles += 1,
                HitObjectKind::Slider(_) => attrs.n_sliders += 1,
                HitObjectKind::Spinner(_) => attrs.n_spinners += 1,
            }
        }

        let diff_objects = OsuDifficultyObject::create_all(hit_objects, &scaling_factor, clock_rate);

        let reading_context = ReadingContext::new(&map_attrs, mods.hd());
        let mut skills = OsuSkills::new(mods, map_attrs.hit_windows.great, reading_context);

        for hit_object in diff_objects.iter() {
            skills.process(hit_object, &diff_objects);
        }

        Self { skills, attrs }
    }

    /// Process the difficulty values and store the results in `attrs`.
    pub fn eval(attrs: &mut OsuDifficultyAttributes, mods: &GameMods, skills: &OsuSkills) {
        let OsuSkills {
            aim,
            aim_no_sliders,
            tapping,
            rhythm,
            reading,
        } = skills;

        let aim_difficulty_value = aim.cloned_difficulty_value();
        let aim_no_sliders_difficulty_value = aim_no_sliders.cloned_difficulty_value();
        let tapping_difficulty_value = tapping.cloned_difficulty_value();
        let rhythm_difficulty_value = rhythm.cloned_difficulty_value();
        let reading_difficulty_value = reading.cloned_difficulty_value();

        let mut aim_rating = calculate_difficulty_rating(aim_difficulty_value);
        let aim_no_sliders_rating = calculate_difficulty_rating(aim_no_sliders_difficulty_value);
        let mut tapping_rating = calculate_difficulty_rating(tapping_difficulty_value);
        let rhythm_rating = calculate_difficulty_rating(rhythm_difficulty_value);
        let mut reading_rating = reading_difficulty_value * DIFFICULTY_MULTIPLIER;

        let slider_factor = if aim_rating > 0.0 {
            aim_no_sliders_rating / aim_rating
        } else {
            1.0
        };

        if mods.td() {
            aim_rating = aim_rating.powf(0.8);
            reading_rating = reading_rating.powf(0.8);
        }

        if mods.rx() {
            aim_rating *= 0.9;
            tapping_rating = 0.0;
            reading_rating *= 0.7;
        } else if mods.ap() {
            tapping_rating *= 0.5;
            aim_rating = 0.0;
            reading_rating *= 0.4;
        }

        let base_performance = norm(1.1, [aim_rating, tapping_rating, reading_rating]);

        attrs.aim = aim_rating;
        attrs.aim_difficult_slider_count = aim.get_difficult_sliders();
        attrs.aim_difficult_strain_count = aim.count_top_weighted_strains(aim_difficulty_value);
        attrs.aim_consistency = consistency_factor(aim.current_strain_peaks());
        attrs.tapping = tapping_rating;
        attrs.speed_note_count = tapping.relevant_note_count();
        attrs.tapping_difficult_strain_count =
            tapping.count_top_weighted_strains(tapping_difficulty_value);
        attrs.tapping_consistency = consistency_factor(tapping.current_strain_peaks());
        attrs.rhythm = rhythm_rating;
        attrs.reading = reading_rating;
        attrs.slider_factor = slider_factor;
        attrs.stars = calculate_star_rating(base_performance);
    }
}

fn calculate_difficulty_rating(difficulty_value: f64) -> f64 {
    difficulty_value.sqrt() * DIFFICULTY_MULTIPLIER
}

fn calculate_star_rating(base_performance: f64) -> f64 {
    if base_performance <= 0.00001 {
        return 0.0;
    }

    PERFORMANCE_BASE_MULTIPLIER.cbrt()
        * STAR_RATING_MULTIPLIER
        * ((100_000.0 / 2.0_f64.powf(1.0 / 1.1) * base_performance).cbrt() + 4.0)
}

#[cfg(test)]
mod tests {
    use rosu_map::section::general::GameMode;

    use crate::model::hit_object::{HitObject, Pos};

    use super::*;

    fn stream(n: u32, spacing: f64) -> Beatmap {
        let hit_objects = (0..n)
            .map(|i| {
                let x = if i % 2 == 0 { 100.0 } else { 300.0 };

                HitObject::circle(Pos::new(x, 192.0), f64::from(i) * spacing)
            })
            .collect();

        Beatmap::new(GameMode::Osu, hit_objects)
            .with_ar(9.0)
            .with_od(8.0)
    }

    fn calculate(map: &Beatmap, mods: u32) -> OsuDifficultyAttributes {
        let difficulty = Difficulty::new().mods(mods);
        let clock_rate = difficulty.get_mods().clock_rate();

        super::difficulty(&difficulty, map, clock_rate)
    }

    #[test]
    fn star_rating_curve() {
        assert!(calculate_star_rating(0.0).abs() < f64::EPSILON);
        assert!(calculate_star_rating(2.0) > calculate_star_rating(1.0));
    }

    #[test]
    fn empty_map() {
        let attrs = calculate(&stream(0, 100.0), 0);

        assert!(attrs.stars.abs() < f64::EPSILON);
        assert!(attrs.aim.abs() < f64::EPSILON);
        assert_eq!(attrs.n_objects(), 0);
        assert_eq!(attrs.version, OsuDifficultyAttributes::VERSION);
    }

    #[test]
    fn two_objects_have_no_difficulty() {
        let attrs = calculate(&stream(2, 100.0), 0);

        assert!(attrs.stars.abs() < f64::EPSILON);
        assert_eq!(attrs.n_circles, 2);
    }

    #[test]
    fn jumps_have_difficulty() {
        let attrs = calculate(&stream(200, 150.0), 0);

        assert!(attrs.aim > 0.0);
        assert!(attrs.tapping > 0.0);
        assert!(attrs.reading > 0.0);
        assert!(attrs.stars > 0.0);
        assert!((0.0..=1.0).contains(&attrs.aim_consistency));
    }

    #[test]
    fn autopilot_removes_aim() {
        let map = stream(200, 150.0);

        let nomod = calculate(&map, 0);
        let autopilot = calculate(&map, 1 << 13);
        let relax = calculate(&map, 1 << 7);

        assert!(autopilot.aim.abs() < f64::EPSILON);
        assert!(relax.tapping.abs() < f64::EPSILON);
        assert!(autopilot.stars < nomod.stars);
        assert!(relax.stars < nomod.stars);
    }

    #[test]
    fn passed_objects() {
        let map = stream(200, 150.0);
        let difficulty = Difficulty::new().passed_objects(100);

        let partial = super::difficulty(&difficulty, &map, 1.0);
        let full = calculate(&map, 0);

        assert_eq!(partial.n_circles, 100);
        assert!(partial.stars <= full.stars);
    }
}
