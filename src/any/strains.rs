use rosu_map::section::general::GameMode;

use crate::{mania::ManiaStrains, osu::OsuStrains, taiko::TaikoStrains};

/// Strain peaks of every skill on a map, one entry per section.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, PartialEq)]
pub enum Strains {
    Osu(OsuStrains),
    Taiko(TaikoStrains),
    Mania(ManiaStrains),
}

impl Strains {
    /// Length of a section in ms, i.e. the time between two peaks.
    pub const fn section_len(&self) -> f64 {
        match self {
            Self::Osu(_) => OsuStrains::SECTION_LEN,
            Self::Taiko(_) => TaikoStrains::SECTION_LEN,
            Self::Mania(_) => ManiaStrains::SECTION_LEN,
        }
    }

    /// The mode whose skills produced the peaks.
    pub const fn mode(&self) -> GameMode {
        match self {
            Self::Osu(_) => GameMode::Osu,
            Self::Taiko(_) => GameMode::Taiko,
            Self::Mania(_) => GameMode::Mania,
        }
    }

    /// Peaks of each skill labeled by the skill's name.
    ///
    /// All skills of a mode share the same amount of sections.
    pub fn skills(&self) -> Vec<(&'static str, &[f64])> {
        match self {
            Self::Osu(strains) => vec![
                ("aim", &strains.aim),
                ("aim_no_sliders", &strains.aim_no_sliders),
                ("tapping", &strains.tapping),
                ("rhythm", &strains.rhythm),
                ("reading", &strains.reading),
            ],
            Self::Taiko(strains) => vec![
                ("reading", &strains.reading),
                ("stamina", &strains.stamina),
                ("single_color_stamina", &strains.single_color_stamina),
            ],
            Self::Mania(strains) => vec![("strain", &strains.strains)],
        }
        .into_iter()
        .map(|(name, peaks)| (name, peaks.as_slice()))
        .collect()
    }

    /// Amount of sections.
    pub fn len(&self) -> usize {
        self.skills().first().map_or(0, |(_, peaks)| peaks.len())
    }

    /// Whether the map had no sections at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<OsuStrains> for Strains {
    fn from(strains: OsuStrains) -> Self {
        Self::Osu(strains)
    }
}

impl From<TaikoStrains> for Strains {
    fn from(strains: TaikoStrains) -> Self {
        Self::Taiko(strains)
    }
}

impl From<ManiaStrains> for Strains {
    fn from(strains: ManiaStrains) -> Self {
        Self::Mania(strains)
    }
}
