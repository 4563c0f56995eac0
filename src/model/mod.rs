/// Beatmap related types.
pub mod beatmap;

/// Error types.
pub mod error;

/// Hit object related types.
pub mod hit_object;

/// Mod related types.
pub mod mods;

pub use rosu_map::section::general::GameMode;
