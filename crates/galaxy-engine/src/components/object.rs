use glam::Vec3;
use serde::Serialize;

use crate::api::types::ObjectId;
use crate::model::EntityRef;

/// What a scene object depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Light,
    Sun,
    /// A star system seen from the galaxy view.
    Star,
    Planet,
    Moon,
    /// Orbit guide line.
    Orbit,
}

/// Geometry of a scene object, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Point,
    Sphere { radius: f32 },
    /// Circle on the XZ plane around `position`.
    Ring { radius: f32 },
}

/// One visual primitive in the scene.
/// `source` links it back to the generated entity it was drawn from.
#[derive(Debug, Clone, Serialize)]
pub struct SceneObject {
    pub id: ObjectId,
    /// Entity name, or a fixed label for lights and the sun.
    pub tag: String,
    pub kind: ObjectKind,
    /// Position in world space.
    pub position: Vec3,
    pub shape: Shape,
    pub source: Option<EntityRef>,
}

impl SceneObject {
    /// Create a new point object at the origin.
    pub fn new(id: ObjectId, kind: ObjectKind) -> Self {
        Self {
            id,
            tag: String::new(),
            kind,
            position: Vec3::ZERO,
            shape: Shape::Point,
            source: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_source(mut self, source: EntityRef) -> Self {
        self.source = Some(source);
        self
    }

    /// Only spheres drawn from an entity take part in picking.
    pub fn is_pickable(&self) -> bool {
        self.source.is_some() && matches!(self.shape, Shape::Sphere { .. })
    }
}
