use crate::{
    any::difficulty::skills::StrainSkill, model::mods::GameMods,
    osu::difficulty::evaluators::ReadingContext,
};

use self::{aim::Aim, reading::Reading, rhythm::Rhythm, tapping::Tapping};

use super::object::OsuDifficultyObject;

pub mod aim;
pub mod reading;
pub mod rhythm;
pub mod tapping;

pub struct OsuSkills {
    pub aim: Aim,
    pub aim_no_sliders: Aim,
    pub tapping: Tapping,
    pub rhythm: Rhythm,
    pub reading: Reading,
}

impl OsuSkills {
    pub fn new(mods: &GameMods, great_hit_window: f64, reading_context: ReadingContext) -> Self {
        Self {
            aim: Aim::new(true),
            aim_no_sliders: Aim::new(false),
            tapping: Tapping::new(great_hit_window, mods.ap()),
            rhythm: Rhythm::new(great_hit_window),
            reading: Reading::new(reading_context),
        }
    }

    pub fn process(&mut self, curr: &OsuDifficultyObject<'_>, objects: &[OsuDifficultyObject<'_>]) {
        self.aim.process(curr, objects);
        self.aim_no_sliders.process(curr, objects);
        self.tapping.process(curr, objects);
        self.rhythm.process(curr, objects);
        self.reading.process(curr, objects);
    }
}
