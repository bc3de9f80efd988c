pub mod api;
pub mod components;
pub mod core;
pub mod error;
pub mod extensions;
pub mod generator;
pub mod input;
pub mod interaction;
pub mod model;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::ExplorerConfig;
pub use api::explorer::{Explorer, View};
pub use api::types::ObjectId;
pub use components::object::{ObjectKind, SceneObject, Shape};
pub use core::scene::Scene;
pub use error::ConfigError;
pub use generator::{generate_galaxy_at, GenerationConfig, IntRange, LoopMode};
#[cfg(not(target_arch = "wasm32"))]
pub use generator::generate_galaxy;
pub use input::queue::{InputEvent, InputQueue};
pub use interaction::{
    pick, FocusController, FocusState, FocusTransition, Hit, PointerEvent, Ray, Raycaster, SphereRaycaster, Viewport,
};
pub use model::{Coordinate, EntityInfo, EntityKind, EntityRef, Galaxy, Moon, Planet, StarSystem};
pub use renderer::camera::PerspectiveCamera;
pub use renderer::draw::{draw_galaxy, draw_system, orbit_ring_points};

// Extensions: animation helpers
pub use extensions::{ease, ease_vec3, lerp, lerp_vec3, Easing, Tween};
