use glam::Vec3;

use crate::extensions::easing::Easing;
use crate::extensions::tween::Tween;

/// Phase of the camera focus transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    Idle,
    Animating,
}

/// Record of one scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTransition {
    /// Increments with every transition; the newest one is the only one applied.
    pub generation: u32,
    pub from: Vec3,
    pub to: Vec3,
    /// Unit vector from the camera to the picked object at pick time.
    pub direction: Vec3,
}

/// Moves the orbit-control look-at target toward picked objects.
///
/// Idle → Animating on a successful pick, Animating → Idle once the duration
/// elapses. A new pick mid-flight restarts from wherever the target is now.
#[derive(Debug, Clone)]
pub struct FocusController {
    /// Transition length in seconds.
    duration: f32,
    easing: Easing,
    tween: Option<Tween>,
    generation: u32,
    last: Option<FocusTransition>,
}

impl FocusController {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            tween: None,
            generation: 0,
            last: None,
        }
    }

    /// Build from a duration in milliseconds.
    pub fn from_millis(duration_ms: f32, easing: Easing) -> Self {
        Self::new(duration_ms / 1000.0, easing)
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Change timing for later transitions; one already in flight keeps its own.
    pub fn set_timing(&mut self, duration: f32, easing: Easing) {
        self.duration = duration;
        self.easing = easing;
    }

    pub fn state(&self) -> FocusState {
        if self.tween.as_ref().is_some_and(|t| t.is_playing()) {
            FocusState::Animating
        } else {
            FocusState::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.state() == FocusState::Animating
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The most recent transition, kept after it finishes.
    pub fn last_transition(&self) -> Option<FocusTransition> {
        self.last
    }

    /// Start moving `current_target` to `picked_position`, superseding any
    /// transition in flight.
    pub fn focus_on(&mut self, camera_position: Vec3, picked_position: Vec3, current_target: Vec3) -> FocusTransition {
        self.generation = self.generation.wrapping_add(1);
        let transition = FocusTransition {
            generation: self.generation,
            from: current_target,
            to: picked_position,
            direction: (picked_position - camera_position).normalize_or_zero(),
        };

        let mut tween = Tween::new(current_target, picked_position, self.duration).with_easing(self.easing);
        tween.start();
        self.tween = Some(tween);
        self.last = Some(transition);

        log::debug!(
            "focus #{} → ({:.1}, {:.1}, {:.1}) over {:.0} ms",
            transition.generation,
            picked_position.x,
            picked_position.y,
            picked_position.z,
            self.duration * 1000.0
        );
        transition
    }

    /// Advance the active transition by `dt` seconds, writing into `target`.
    /// Returns true on the frame the transition completes.
    pub fn tick(&mut self, dt: f32, target: &mut Vec3) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        if let Some(value) = tween.advance(dt) {
            *target = value;
        }
        if tween.is_complete() {
            self.tween = None;
            return true;
        }
        false
    }

    /// Drop any transition in flight, leaving the target where it is.
    pub fn cancel(&mut self) {
        self.tween = None;
    }
}

impl Default for FocusController {
    fn default() -> Self {
        Self::from_millis(500.0, Easing::Linear)
    }
}
