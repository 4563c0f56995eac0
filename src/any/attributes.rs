use crate::{
    mania::{ManiaDifficultyAttributes, ManiaPerformanceAttributes},
    model::error::CalculateError,
    osu::OsuDifficultyAttributes,
    taiko::{TaikoDifficultyAttributes, TaikoPerformanceAttributes},
};

use super::performance::Performance;

/// The result of a difficulty calculation based on the mode.
#[derive(Clone, Debug, PartialEq)]
pub enum DifficultyAttributes {
    /// osu!standard difficulty calculation result.
    Osu(OsuDifficultyAttributes),
    /// osu!taiko difficulty calculation result.
    Taiko(TaikoDifficultyAttributes),
    /// osu!mania difficulty calculation result.
    Mania(ManiaDifficultyAttributes),
}

impl DifficultyAttributes {
    /// The star value.
    pub const fn stars(&self) -> f64 {
        match self {
            Self::Osu(attrs) => attrs.stars,
            Self::Taiko(attrs) => attrs.stars,
            Self::Mania(attrs) => attrs.stars,
        }
    }

    /// Version of the calculation the attributes originate from.
    pub const fn version(&self) -> u32 {
        match self {
            Self::Osu(attrs) => attrs.version,
            Self::Taiko(attrs) => attrs.version,
            Self::Mania(attrs) => attrs.version,
        }
    }

    /// Returns a builder for performance calculation.
    ///
    /// Fails for osu!standard attributes as there is no performance
    /// calculation for them.
    pub fn performance(self) -> Result<Performance, CalculateError> {
        Performance::new(self)
    }
}

/// The result of a performance calculation based on the mode.
#[derive(Clone, Debug, PartialEq)]
pub enum PerformanceAttributes {
    /// osu!taiko performance calculation result.
    Taiko(TaikoPerformanceAttributes),
    /// osu!mania performance calculation result.
    Mania(ManiaPerformanceAttributes),
}

impl PerformanceAttributes {
    /// The pp value.
    pub const fn pp(&self) -> f64 {
        match self {
            Self::Taiko(attrs) => attrs.pp,
            Self::Mania(attrs) => attrs.pp,
        }
    }

    /// The star value.
    pub const fn stars(&self) -> f64 {
        match self {
            Self::Taiko(attrs) => attrs.stars(),
            Self::Mania(attrs) => attrs.stars(),
        }
    }

    /// Difficulty attributes that were used for the performance calculation.
    pub fn difficulty_attributes(&self) -> DifficultyAttributes {
        match self {
            Self::Taiko(attrs) => DifficultyAttributes::Taiko(attrs.difficulty.clone()),
            Self::Mania(attrs) => DifficultyAttributes::Mania(attrs.difficulty.clone()),
        }
    }
}

impl From<PerformanceAttributes> for DifficultyAttributes {
    fn from(attrs: PerformanceAttributes) -> Self {
        match attrs {
            PerformanceAttributes::Taiko(attrs) => Self::Taiko(attrs.difficulty),
            PerformanceAttributes::Mania(attrs) => Self::Mania(attrs.difficulty),
        }
    }
}

macro_rules! from_mode_attrs {
    ( $mode:ident: $difficulty:ident $(, $performance:ident )? ) => {
        impl From<$difficulty> for DifficultyAttributes {
            fn from(attrs: $difficulty) -> Self {
                Self::$mode(attrs)
            }
        }

        $(
            impl From<$performance> for PerformanceAttributes {
                fn from(attrs: $performance) -> Self {
                    Self::$mode(attrs)
                }
            }
        )?
    };
}

from_mode_attrs!(Osu: OsuDifficultyAttributes);
from_mode_attrs!(Taiko: TaikoDifficultyAttributes, TaikoPerformanceAttributes);
from_mode_attrs!(Mania: ManiaDifficultyAttributes, ManiaPerformanceAttributes);
