use crate::{
    any::{Difficulty, difficulty::skills::StrainSkill},
    model::beatmap::Beatmap,
    taiko::difficulty::DifficultyValues,
};

/// The result of calculating the strains on an osu!taiko map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, PartialEq)]
pub struct TaikoStrains {
    /// Strain peaks of the reading skill.
    pub reading: Vec<f64>,
    /// Strain peaks of the stamina skill.
    pub stamina: Vec<f64>,
    /// Strain peaks of the stamina skill on mono coloured streams.
    pub single_color_stamina: Vec<f64>,
}

impl TaikoStrains {
    /// Time between two strains in ms.
    pub const SECTION_LEN: f64 = 400.0;
}

pub fn strains(difficulty: &Difficulty, map: &Beatmap, clock_rate: f64) -> TaikoStrains {
    let DifficultyValues { skills, .. } = DifficultyValues::calculate(difficulty, map, clock_rate);

    TaikoStrains {
        reading: skills.reading.into_current_strain_peaks().into_vec(),
        stamina: skills.stamina.into_current_strain_peaks().into_vec(),
        single_color_stamina: skills
            .single_color_stamina
            .into_current_strain_peaks()
            .into_vec(),
    }
}
