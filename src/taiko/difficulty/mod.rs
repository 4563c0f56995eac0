use crate::{
    any::difficulty::{Difficulty, skills::StrainSkill},
    model::{beatmap::Beatmap, mods::GameMods},
    util::{
        difficulty::{norm, reverse_lerp},
        strains_vec::StrainsVec,
    },
};

use self::{object::TaikoDifficultyObject, skills::TaikoSkills};

use super::attributes::TaikoDifficultyAttributes;

pub mod evaluators;
pub mod object;
pub mod skills;

const DIFFICULTY_MULTIPLIER: f64 = 0.084_375;
const READING_SKILL_MULTIPLIER: f64 = 0.100 * DIFFICULTY_MULTIPLIER;
const STAMINA_SKILL_MULTIPLIER: f64 = 0.445 * DIFFICULTY_MULTIPLIER;

pub fn difficulty(
    difficulty: &Difficulty,
    map: &Beatmap,
    clock_rate: f64,
) -> TaikoDifficultyAttributes {
    let DifficultyValues { skills, mut attrs } =
        DifficultyValues::calculate(difficulty, map, clock_rate);

    DifficultyValues::eval(&mut attrs, skills, difficulty.get_mods().rx());

    attrs
}

pub struct DifficultyValues {
    pub skills: TaikoSkills,
    pub attrs: TaikoDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap, clock_rate: f64) -> Self {
        let mods = difficulty.get_mods();
        let take = difficulty.get_passed_objects().min(map.hit_objects.len());
        let hit_objects = &map.hit_objects[..take];

        let map_attrs = map.attributes(mods, clock_rate);

        let max_combo = hit_objects.iter().filter(|h| !h.is_spinner()).count();

        let attrs = TaikoDifficultyAttributes {
            great_hit_window: map_attrs.hit_windows.great,
            ok_hit_window: map_attrs.hit_windows.ok,
            max_combo: u32::try_from(max_combo).unwrap_or(u32::MAX),
            is_convert: map.is_convert,
            version: TaikoDifficultyAttributes::VERSION,
            ..Default::default()
        };

        let global_slider_velocity = global_slider_velocity(map.slider_multiplier, mods);
        let diff_objects =
            TaikoDifficultyObject::create_all(hit_objects, global_slider_velocity, clock_rate);

        let mut skills = TaikoSkills::new(map.is_convert);

        for hit_object in diff_objects.iter() {
            skills.process(hit_object, &diff_objects);
        }

        Self { skills, attrs }
    }

    /// Process the difficulty values and store the results in `attrs`.
    pub fn eval(attrs: &mut TaikoDifficultyAttributes, skills: TaikoSkills, is_relax: bool) {
        let TaikoSkills {
            reading,
            stamina,
            single_color_stamina,
        } = skills;

        let reading_difficulty_value = reading.cloned_difficulty_value();
        let stamina_difficulty_value = stamina.cloned_difficulty_value();

        let reading_skill = reading_difficulty_value * READING_SKILL_MULTIPLIER;
        let stamina_skill = stamina_difficulty_value * STAMINA_SKILL_MULTIPLIER;
        let mono_stamina_rating =
            single_color_stamina.into_difficulty_value() * STAMINA_SKILL_MULTIPLIER;

        let mono_stamina_factor = if stamina_skill.abs() >= f64::EPSILON {
            (mono_stamina_rating / stamina_skill).powf(5.0)
        } else {
            1.0
        };

        let stamina_difficult_strains =
            stamina.count_top_weighted_strains(stamina_difficulty_value);

        let strain_length_bonus =
            1.0 + 0.15 * reverse_lerp(stamina_difficult_strains, 1000.0, 1555.0);

        let combined_rating = combined_difficulty_value(
            reading.into_current_strain_peaks(),
            stamina.into_current_strain_peaks(),
            is_relax || attrs.is_convert,
            strain_length_bonus,
        );

        let star_rating = rescale(combined_rating * 1.4);

        // Proportional contribution of each skill to the star rating
        let skill_sum = reading_skill + stamina_skill;

        let (reading_difficulty, stamina_difficulty) = if skill_sum > 0.0 {
            let skill_rating = star_rating / skill_sum;

            (reading_skill * skill_rating, stamina_skill * skill_rating)
        } else {
            (0.0, 0.0)
        };

        attrs.reading = reading_difficulty;
        attrs.stamina = stamina_difficulty;
        attrs.mono_stamina_factor = mono_stamina_factor;
        attrs.stars = star_rating;
    }
}

/// Base scroll speed multiplier after applying mods.
fn global_slider_velocity(slider_multiplier: f64, mods: &GameMods) -> f64 {
    if mods.hr() {
        const SLIDER_MULTIPLIER: f64 = 1.4 * 4.0 / 3.0;

        slider_multiplier * SLIDER_MULTIPLIER
    } else if mods.ez() {
        const SLIDER_MULTIPLIER: f64 = 0.8;

        slider_multiplier * SLIDER_MULTIPLIER
    } else {
        slider_multiplier
    }
}

/// Weighted sum over the combined section peaks of both skills.
fn combined_difficulty_value(
    reading_peaks: StrainsVec,
    stamina_peaks: StrainsVec,
    extra_fingers: bool,
    strain_length_bonus: f64,
) -> f64 {
    let mut peaks = StrainsVec::with_capacity(reading_peaks.len().min(stamina_peaks.len()));

    for (reading_peak, stamina_peak) in reading_peaks.iter().zip(stamina_peaks.iter()) {
        let reading_peak = reading_peak * READING_SKILL_MULTIPLIER;
        let mut stamina_peak = stamina_peak * STAMINA_SKILL_MULTIPLIER * strain_length_bonus;

        // Available finger count is increased by 150%
        if extra_fingers {
            stamina_peak /= 1.5;
        }

        peaks.push(norm(2.0, [stamina_peak, reading_peak]));
    }

    let mut difficulty = 0.0;
    let mut weight = 1.0;

    for strain in peaks.sorted_non_zero_iter() {
        difficulty += strain * weight;
        weight *= 0.9;
    }

    difficulty
}

fn rescale(stars: f64) -> f64 {
    if stars < 0.0 {
        0.0
    } else {
        10.43 * f64::ln(stars / 8.0 + 1.0)
    }
}
