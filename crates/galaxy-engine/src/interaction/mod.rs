//! Double-click picking and the camera focus transition that follows it.

pub mod focus;
pub mod picker;
pub mod ray;

pub use focus::{FocusController, FocusState, FocusTransition};
pub use picker::{pick, PointerEvent, Viewport};
pub use ray::{Hit, Ray, Raycaster, SphereRaycaster};
