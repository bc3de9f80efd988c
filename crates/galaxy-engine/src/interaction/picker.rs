use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::ray::Raycaster;
use crate::components::object::SceneObject;
use crate::renderer::camera::PerspectiveCamera;

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True for zero, negative or NaN sizes.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn aspect(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// Pixel coordinates (origin top-left, y down) to normalized device coordinates.
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new((x / self.width) * 2.0 - 1.0, -(y / self.height) * 2.0 + 1.0)
    }

    /// Inverse of `to_ndc`.
    pub fn to_pixel(&self, ndc: Vec2) -> Vec2 {
        Vec2::new((ndc.x + 1.0) / 2.0 * self.width, (1.0 - ndc.y) / 2.0 * self.height)
    }

    /// Pixel at which `world` appears through `camera`.
    pub fn pixel_for(&self, camera: &PerspectiveCamera, world: Vec3) -> Vec2 {
        self.to_pixel(camera.project(world).truncate())
    }
}

/// A double-click in client space, with the viewport it happened in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub viewport: Viewport,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, viewport: Viewport) -> Self {
        Self { x, y, viewport }
    }

    pub fn to_ndc(&self) -> Vec2 {
        self.viewport.to_ndc(self.x, self.y)
    }
}

/// Resolve which candidate, if any, lies under the pointer.
///
/// Casts a ray from the camera through the pointer and returns the nearest
/// object struck. Reads only; neither camera nor candidates change.
pub fn pick<'a, R: Raycaster + ?Sized>(
    event: &PointerEvent,
    camera: &PerspectiveCamera,
    candidates: &'a [SceneObject],
    raycaster: &R,
) -> Option<&'a SceneObject> {
    if event.viewport.is_empty() || candidates.is_empty() {
        return None;
    }
    let ray = camera.ray_from_ndc(event.to_ndc());
    let hits = raycaster.intersect(&ray, candidates);
    let hit = hits.first()?;
    let object = candidates.get(hit.index)?;
    log::debug!("pick hit {} at distance {:.1}", object.tag, hit.distance);
    Some(object)
}
