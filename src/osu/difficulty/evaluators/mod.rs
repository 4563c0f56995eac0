pub use self::{
    aim::AimEvaluator,
    reading::{ReadingContext, ReadingEvaluator},
    rhythm::RhythmEvaluator,
    speed::SpeedEvaluator,
};

mod aim;
mod reading;
mod rhythm;
mod speed;
