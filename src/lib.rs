//! Strain-based difficulty and performance rating for osu!standard,
//! osu!taiko, and osu!mania charts.
//!
//! A chart is a [`Beatmap`]: a sorted list of hit objects plus its difficulty
//! settings. [`Difficulty`] turns a chart into star ratings and
//! [`Performance`] turns those attributes plus a score into pp.
//!
//! ## Usage
//!
//! ```
//! use rosu_rating::{Beatmap, Difficulty, Performance};
//! use rosu_rating::model::{GameMode, hit_object::{HitObject, Pos}};
//!
//! let hit_objects = (0..400)
//!     .map(|i| HitObject::circle(Pos::default(), f64::from(i) * 125.0).with_rim(i % 4 == 1))
//!     .collect();
//!
//! let map = Beatmap::new(GameMode::Taiko, hit_objects).with_od(5.0);
//!
//! // Calculate difficulty attributes
//! let diff_attrs = Difficulty::new()
//!     .mods(64) // DT
//!     .calculate(&map)
//!     .unwrap();
//!
//! let stars = diff_attrs.stars();
//!
//! // Calculate performance attributes
//! let perf_attrs = Performance::new(diff_attrs)
//!     .unwrap()
//!     .mods(64) // DT, same as before
//!     .misses(1)
//!     .calculate();
//!
//! println!("Stars: {stars} | PP: {}", perf_attrs.pp());
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features enabled |
//! | `tracing` | Calculations emit `tracing` events on completion and on rejected input. | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

#[macro_use]
mod util;

#[doc(inline)]
pub use self::{
    any::{
        Difficulty, DifficultyAttributes, HitResult, Performance, PerformanceAttributes, Strains,
    },
    model::beatmap::Beatmap,
};

/// Types for calculations of any mode.
pub mod any;

/// Types for osu!standard calculations.
pub mod osu;

/// Types for osu!taiko calculations.
pub mod taiko;

/// Types for osu!mania calculations.
pub mod mania;

/// Types used in and around this crate.
pub mod model;
