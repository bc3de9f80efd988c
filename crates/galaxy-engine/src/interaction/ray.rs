use glam::Vec3;

use crate::components::object::{SceneObject, Shape};

/// Half-line from `origin` along the unit vector `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; `direction` is normalized (zero stays zero).
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first point on the sphere's surface, if any.
    /// A ray starting inside the sphere hits its far side.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + root;
        (far >= 0.0).then_some(far)
    }
}

/// One ray/object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into the candidate slice.
    pub index: usize,
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space point where the ray struck.
    pub point: Vec3,
}

/// Ray-intersection capability of the rendering side.
pub trait Raycaster {
    /// Every pickable candidate the ray strikes, nearest first.
    fn intersect(&self, ray: &Ray, candidates: &[SceneObject]) -> Vec<Hit>;
}

/// Intersects against the bounding sphere of each pickable object.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphereRaycaster {
    /// Added to every radius, so small bodies stay clickable.
    pub padding: f32,
}

impl SphereRaycaster {
    pub fn with_padding(padding: f32) -> Self {
        Self { padding }
    }
}

impl Raycaster for SphereRaycaster {
    fn intersect(&self, ray: &Ray, candidates: &[SceneObject]) -> Vec<Hit> {
        let mut hits: Vec<Hit> = candidates
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_pickable())
            .filter_map(|(index, o)| {
                let Shape::Sphere { radius } = o.shape else {
                    return None;
                };
                ray.intersect_sphere(o.position, radius + self.padding)
                    .map(|distance| Hit {
                        index,
                        distance,
                        point: ray.at(distance),
                    })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
