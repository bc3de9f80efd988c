use crate::api::types::ObjectId;
use crate::components::object::SceneObject;
use crate::model::EntityRef;

/// Flat object storage, cleared and rebuilt on every full draw.
/// Designed for small-to-medium object counts (hundreds, not millions).
pub struct Scene {
    objects: Vec<SceneObject>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::with_capacity(256),
            next_id: 1,
        }
    }

    /// Generate the next unique object ID. IDs are never reused, even across clears.
    pub fn next_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an object to the scene.
    pub fn spawn(&mut self, object: SceneObject) -> ObjectId {
        let id = object.id;
        self.objects.push(object);
        id
    }

    /// Get a reference to an object by ID.
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// All objects in draw order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    /// Find the first object with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.tag == tag)
    }

    /// Find the body drawn for an entity (its orbit guide is skipped).
    pub fn find_by_source(&self, source: EntityRef) -> Option<&SceneObject> {
        self.objects
            .iter()
            .find(|o| o.source == Some(source) && o.is_pickable())
    }

    pub fn pickable_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_pickable()).count()
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove every object. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        std::mem::take(&mut self.objects).len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::object::{ObjectKind, Shape};
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = scene.next_id();
        scene.spawn(SceneObject::new(id, ObjectKind::Star).with_position(Vec3::new(10.0, 20.0, 30.0)));
        let o = scene.get(id).unwrap();
        assert_eq!(o.position, Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn clear_empties_scene_and_keeps_ids_fresh() {
        let mut scene = Scene::new();
        for _ in 0..3 {
            let id = scene.next_id();
            scene.spawn(SceneObject::new(id, ObjectKind::Orbit));
        }
        assert_eq!(scene.clear(), 3);
        assert!(scene.is_empty());
        assert_eq!(scene.next_id(), ObjectId(4));
    }

    #[test]
    fn find_by_source_skips_orbit_rings() {
        let mut scene = Scene::new();
        let source = EntityRef::Planet { system: 0, planet: 2 };

        let ring = scene.next_id();
        scene.spawn(
            SceneObject::new(ring, ObjectKind::Orbit)
                .with_shape(Shape::Ring { radius: 900.0 })
                .with_source(source),
        );
        let body = scene.next_id();
        scene.spawn(
            SceneObject::new(body, ObjectKind::Planet)
                .with_tag("s0-p2")
                .with_shape(Shape::Sphere { radius: 70.0 })
                .with_source(source),
        );

        assert_eq!(scene.find_by_source(source).unwrap().id, body);
        assert_eq!(scene.find_by_tag("s0-p2").unwrap().id, body);
        assert_eq!(scene.pickable_count(), 1);
    }
}
