// extensions/tween.rs
//
// Time-bounded interpolation of a Vec3 value.
//
// Usage:
//   let mut tween = Tween::new(from, to, 0.5).with_easing(Easing::QuadOut);
//   tween.start();
//   if let Some(v) = tween.advance(dt) { target = v; }

use glam::Vec3;

use super::easing::{ease_vec3, Easing};

#[derive(Debug, Clone)]
pub struct Tween {
    pub from: Vec3,
    pub to: Vec3,
    /// Duration in seconds.
    pub duration: f32,
    /// Elapsed time.
    pub elapsed: f32,
    pub easing: Easing,
    /// Set by `start`; a tween that was never started does not advance.
    playing: bool,
}

impl Tween {
    /// Create a stopped tween from `from` to `to` over `duration` seconds.
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: Easing::Linear,
            playing: false,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Value at the current progress.
    pub fn value(&self) -> Vec3 {
        ease_vec3(self.from, self.to, self.progress(), self.easing)
    }

    /// Advance by `dt` seconds and return the new value, or None while stopped.
    pub fn advance(&mut self, dt: f32) -> Option<Vec3> {
        if !self.playing {
            return None;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration.max(0.0));
        if self.is_complete() {
            self.playing = false;
        }
        Some(self.value())
    }
}
