use glam::{Mat4, Vec2, Vec3};

use crate::interaction::ray::Ray;

/// Perspective camera driven by orbit controls.
/// Always looks from `position` toward `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Look-at point of the orbit controls. Focus transitions animate this.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// Place the camera and aim it.
    pub fn set_view(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }

    /// Update the aspect ratio for a new viewport size. Zero sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Unit vector from the camera toward `point`, or zero if they coincide.
    pub fn direction_to(&self, point: Vec3) -> Vec3 {
        (point - self.position).normalize_or_zero()
    }

    /// +Y, unless the camera looks straight up or down.
    fn up(&self) -> Vec3 {
        let forward = self.direction_to(self.target);
        if forward.cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up())
    }

    /// Depth maps to [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World position to normalized device coordinates.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// Ray from the camera through a point in normalized device coordinates.
    /// Built from the camera basis rather than an inverted matrix, so it stays
    /// precise at galaxy scale.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let forward = self.direction_to(self.target);
        let right = forward.cross(self.up()).normalize_or_zero();
        let up = right.cross(forward);
        let half_height = (self.fov_y * 0.5).tan();
        let half_width = half_height * self.aspect;
        let direction = forward + right * (ndc.x * half_width) + up * (ndc.y * half_height);
        Ray::new(self.position, direction)
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(45.0, 16.0 / 9.0, 1.0, 100_000.0)
    }
}
