pub use self::{reading::ReadingEvaluator, stamina::StaminaEvaluator};

mod reading;
mod stamina;
