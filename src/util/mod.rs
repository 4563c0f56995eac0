#[macro_use]
mod macros;

pub mod difficulty;
pub mod float_ext;
pub mod strains_vec;
