use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::config::ExplorerConfig;
use crate::components::object::{ObjectKind, Shape};
use crate::core::scene::Scene;
use crate::api::types::ObjectId;
use crate::error::ConfigError;
use crate::generator::generation::generate_galaxy_at;
use crate::input::queue::{InputEvent, InputQueue};
use crate::interaction::focus::{FocusController, FocusTransition};
use crate::interaction::picker::{pick, PointerEvent, Viewport};
use crate::interaction::ray::SphereRaycaster;
use crate::model::{EntityInfo, EntityRef, Galaxy};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::draw::{draw_galaxy, draw_system, orbit_ring_points, ORBIT_RESOLUTION};

/// Which part of the galaxy is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum View {
    Galaxy,
    System { index: usize },
}

/// Wires the generator, scene, camera and focus controller into one loop.
///
/// The UI shell pushes input events; `tick` drains them once per frame and
/// then advances the focus transition.
pub struct Explorer {
    config: ExplorerConfig,
    rng: ChaCha8Rng,
    clock: fn() -> u64,
    galaxy: Galaxy,
    scene: Scene,
    camera: PerspectiveCamera,
    viewport: Viewport,
    raycaster: SphereRaycaster,
    focus: FocusController,
    view: View,
    input: InputQueue,
    selected: Option<EntityRef>,
}

impl Explorer {
    /// Generate the first galaxy and draw the galaxy view.
    /// Reads the system clock, so it is not built for wasm32; use `with_clock` there.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(config: ExplorerConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_clock(config, seed, crate::generator::naming::now_millis)
    }

    /// As `new`, reading wall-clock milliseconds from `clock` for galaxy names.
    pub fn with_clock(config: ExplorerConfig, seed: u64, clock: fn() -> u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let galaxy = generate_galaxy_at(&config.generation, &mut rng, clock())?;

        let viewport = config.viewport;
        let mut camera = PerspectiveCamera::new(config.fov_y_degrees, viewport.aspect(), config.near, config.far);
        camera.set_view(config.galaxy_camera, Vec3::ZERO);

        let mut explorer = Self {
            focus: FocusController::from_millis(config.focus_duration_ms, config.focus_easing),
            raycaster: SphereRaycaster::with_padding(config.pick_padding),
            config,
            rng,
            clock,
            galaxy,
            scene: Scene::new(),
            camera,
            viewport,
            view: View::Galaxy,
            input: InputQueue::new(),
            selected: None,
        };
        draw_galaxy(&explorer.galaxy, &mut explorer.scene);
        Ok(explorer)
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Handle queued input, then advance the focus transition by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for event in self.input.drain() {
            self.handle_event(event);
        }
        if self.focus.tick(dt, &mut self.camera.target) {
            log::debug!("focus #{} settled", self.focus.generation());
        }
    }

    /// Apply one event immediately, bypassing the queue.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::DoubleClick { x, y } => {
                self.double_click(x, y);
            }
            InputEvent::Resize { width, height } => self.resize(width, height),
            InputEvent::Regenerate => self.regenerate(),
            InputEvent::OpenSystem { index } => self.open_system(index),
            InputEvent::OpenGalaxy => self.open_galaxy(),
        }
    }

    /// Pick under the pointer and focus on the hit. A miss changes nothing.
    pub fn double_click(&mut self, x: f32, y: f32) -> Option<FocusTransition> {
        let event = PointerEvent::new(x, y, self.viewport);
        let (position, source) = pick(&event, &self.camera, self.scene.objects(), &self.raycaster)
            .map(|object| (object.position, object.source))?;

        self.selected = source;
        Some(self.focus.focus_on(self.camera.position, position, self.camera.target))
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        if viewport.is_empty() {
            log::warn!("ignoring empty viewport {}x{}", width, height);
            return;
        }
        self.viewport = viewport;
        self.camera.resize(width, height);
    }

    /// Replace the whole galaxy and return to the galaxy view.
    pub fn regenerate(&mut self) {
        match generate_galaxy_at(&self.config.generation, &mut self.rng, (self.clock)()) {
            Ok(galaxy) => {
                self.galaxy = galaxy;
                self.open_galaxy();
            }
            Err(e) => log::warn!("regeneration skipped: {}", e),
        }
    }

    /// Show one star system. Out-of-range indices are ignored.
    pub fn open_system(&mut self, index: usize) {
        let Some(system) = self.galaxy.system(index) else {
            log::warn!("no system {} in galaxy {}", index, self.galaxy.name());
            return;
        };
        draw_system(system, index, &mut self.scene);
        self.view = View::System { index };
        self.reset_camera(self.config.system_camera);
    }

    pub fn open_galaxy(&mut self) {
        draw_galaxy(&self.galaxy, &mut self.scene);
        self.view = View::Galaxy;
        self.reset_camera(self.config.galaxy_camera);
    }

    fn reset_camera(&mut self, position: Vec3) {
        self.focus.cancel();
        self.selected = None;
        self.camera.set_view(position, Vec3::ZERO);
    }

    /// Swap in a new config. Generation ranges take effect on the next regenerate;
    /// a focus transition in flight finishes on its old timing. The viewport is
    /// applied only when it differs from the previous config's.
    pub fn set_config(&mut self, config: ExplorerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.focus.set_timing(config.focus_duration_ms / 1000.0, config.focus_easing);
        if config.viewport != self.config.viewport {
            self.resize(config.viewport.width, config.viewport.height);
        }
        self.raycaster = SphereRaycaster::with_padding(config.pick_padding);
        self.camera.fov_y = config.fov_y_degrees.to_radians();
        self.camera.near = config.near;
        self.camera.far = config.far;
        self.config = config;
        log::info!("explorer config updated");
        Ok(())
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = ExplorerConfig::from_json(json).inspect_err(|e| log::warn!("rejected config: {}", e))?;
        self.set_config(config)
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    pub fn selected(&self) -> Option<EntityInfo<'_>> {
        self.galaxy.resolve(self.selected?)
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected().map(|info| info.name)
    }

    /// Polyline for an orbit guide in the current scene.
    pub fn orbit_ring(&self, id: ObjectId) -> Option<Vec<Vec3>> {
        let object = self.scene.get(id)?;
        match (object.kind, object.shape) {
            (ObjectKind::Orbit, Shape::Ring { radius }) => {
                Some(orbit_ring_points(radius, object.position, ORBIT_RESOLUTION))
            }
            _ => None,
        }
    }
}
