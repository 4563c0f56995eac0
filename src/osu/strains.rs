use crate::{
    any::{Difficulty, difficulty::skills::StrainSkill},
    model::beatmap::Beatmap,
    osu::difficulty::DifficultyValues,
};

/// The result of calculating the strains on an osu!standard map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, PartialEq)]
pub struct OsuStrains {
    /// Strain peaks of the aim skill.
    pub aim: Vec<f64>,
    /// Strain peaks of the aim skill without sliders.
    pub aim_no_sliders: Vec<f64>,
    /// Strain peaks of the tapping skill.
    pub tapping: Vec<f64>,
    /// Strain peaks of the rhythm skill.
    pub rhythm: Vec<f64>,
    /// Strain peaks of the reading skill.
    pub reading: Vec<f64>,
}

impl OsuStrains {
    /// Time between two strains in ms.
    pub const SECTION_LEN: f64 = 400.0;
}

pub fn strains(difficulty: &Difficulty, map: &Beatmap, clock_rate: f64) -> OsuStrains {
    let DifficultyValues { skills, .. } = DifficultyValues::calculate(difficulty, map, clock_rate);

    OsuStrains {
        aim: skills.aim.into_current_strain_peaks().into_vec(),
        aim_no_sliders: skills.aim_no_sliders.into_current_strain_peaks().into_vec(),
        tapping: skills.tapping.into_current_strain_peaks().into_vec(),
        rhythm: skills.rhythm.into_current_strain_peaks().into_vec(),
        reading: skills.reading.into_current_strain_peaks().into_vec(),
    }
}
