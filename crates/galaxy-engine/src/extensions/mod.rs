// extensions/mod.rs
//
// Animation helpers. Decoupled from the scene and the camera: callers own the
// value being animated and apply each sampled frame themselves.

pub mod easing;
pub mod tween;

pub use easing::{Easing, ease, ease_vec3, lerp, lerp_vec3};
pub use tween::Tween;
