//! Procedural generation of a galaxy from bounded random ranges.

pub mod config;
pub mod generation;
pub mod naming;
pub mod sampling;

pub use config::{GenerationConfig, IntRange, LoopMode};
pub use generation::generate_galaxy_at;
#[cfg(not(target_arch = "wasm32"))]
pub use generation::generate_galaxy;
pub use sampling::{draw_angle, draw_exclusive, draw_inclusive, unit_circle};
