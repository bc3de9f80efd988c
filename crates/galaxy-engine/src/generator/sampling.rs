//! Random draws used by the generator.
//!
//! The source of randomness is any `rand::Rng`, so tests can inject a seeded
//! `ChaCha8Rng` and get the same galaxy back every time.

use std::f64::consts::TAU;

use rand::Rng;

use crate::model::Coordinate;

/// Integer in `[ceil(min), floor(max)]`, both ends inclusive.
///
/// Callers validate the bounds first; an empty range returns `ceil(min)`.
pub fn draw_inclusive<R: Rng>(rng: &mut R, min: f64, max: f64) -> i64 {
    let min = min.ceil();
    let max = max.floor();
    let span = (max - min + 1.0).max(0.0);
    (rng.gen::<f64>() * span).floor() as i64 + min as i64
}

/// Integer in `[ceil(min), floor(max))`.
pub fn draw_exclusive<R: Rng>(rng: &mut R, min: f64, max: f64) -> i64 {
    let min = min.ceil();
    let max = max.floor();
    let span = (max - min).max(0.0);
    (rng.gen::<f64>() * span).floor() as i64 + min as i64
}

/// Uniform angle in `[0, 2π)`.
pub fn draw_angle<R: Rng>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * TAU
}

/// Point on the unit circle of the XZ orbital plane.
pub fn unit_circle(angle: f64) -> Coordinate {
    Coordinate::new(angle.cos(), 0.0, angle.sin())
}
