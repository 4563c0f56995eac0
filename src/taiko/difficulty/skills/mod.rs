use crate::any::difficulty::skills::StrainSkill;

use self::{reading::Reading, stamina::Stamina};

use super::object::TaikoDifficultyObject;

pub mod reading;
pub mod stamina;

pub struct TaikoSkills {
    pub reading: Reading,
    pub stamina: Stamina,
    pub single_color_stamina: Stamina,
}

impl TaikoSkills {
    pub fn new(is_convert: bool) -> Self {
        Self {
            reading: Reading::new(),
            stamina: Stamina::new(false, is_convert),
            single_color_stamina: Stamina::new(true, is_convert),
        }
    }

    pub fn process(&mut self, curr: &TaikoDifficultyObject, objects: &[TaikoDifficultyObject]) {
        self.reading.process(curr, objects);
        self.stamina.process(curr, objects);
        self.single_color_stamina.process(curr, objects);
    }
}
