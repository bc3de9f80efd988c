//! Declarative scene construction: one visual object per generated entity.
//!
//! Orbital bodies store only a unit-circle direction; placement multiplies it
//! by the orbit distance and offsets moons by their planet's placed position.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::components::object::{ObjectKind, SceneObject, Shape};
use crate::core::scene::Scene;
use crate::model::{EntityRef, Galaxy, Moon, Planet, StarSystem};

pub const SUN_RADIUS: f32 = 100.0;
/// Radius of a star system's marker in the galaxy view.
pub const STAR_RADIUS: f32 = 20.0;
/// Segments per orbit guide.
pub const ORBIT_RESOLUTION: usize = 100;

/// World position of a planet around a sun at the origin.
pub fn planet_position(planet: &Planet) -> Vec3 {
    planet.coords().to_vec3() * planet.distance_from_sun() as f32
}

/// World position of a moon around its placed planet.
pub fn moon_position(planet_position: Vec3, moon: &Moon) -> Vec3 {
    planet_position + moon.coords().to_vec3() * moon.distance_from_planet() as f32
}

/// Closed loop on the XZ plane: `resolution + 1` vertices, last equal to first.
pub fn orbit_ring_points(radius: f32, center: Vec3, resolution: usize) -> Vec<Vec3> {
    let resolution = resolution.max(1);
    (0..=resolution)
        .map(|i| {
            let angle = i as f32 / resolution as f32 * TAU;
            center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

fn spawn_light(scene: &mut Scene) {
    let id = scene.next_id();
    scene.spawn(SceneObject::new(id, ObjectKind::Light).with_tag("light"));
}

/// Rebuild `scene` as the galaxy overview: a light and one star per system.
pub fn draw_galaxy(galaxy: &Galaxy, scene: &mut Scene) {
    scene.clear();
    spawn_light(scene);

    for (index, system) in galaxy.systems().iter().enumerate() {
        let id = scene.next_id();
        scene.spawn(
            SceneObject::new(id, ObjectKind::Star)
                .with_tag(system.name())
                .with_position(system.coords().to_vec3())
                .with_shape(Shape::Sphere { radius: STAR_RADIUS })
                .with_source(EntityRef::System { system: index }),
        );
    }

    log::debug!("drew galaxy {} ({} objects)", galaxy.name(), scene.len());
}

/// Rebuild `scene` as one system: sun, planets, moons and their orbit guides.
pub fn draw_system(system: &StarSystem, system_index: usize, scene: &mut Scene) {
    scene.clear();
    spawn_light(scene);

    let id = scene.next_id();
    scene.spawn(
        SceneObject::new(id, ObjectKind::Sun)
            .with_tag("sun")
            .with_shape(Shape::Sphere { radius: SUN_RADIUS }),
    );

    for (p, planet) in system.planets().iter().enumerate() {
        let source = EntityRef::Planet { system: system_index, planet: p };
        let position = planet_position(planet);

        let id = scene.next_id();
        scene.spawn(
            SceneObject::new(id, ObjectKind::Planet)
                .with_tag(planet.name())
                .with_position(position)
                .with_shape(Shape::Sphere { radius: planet.radius() as f32 })
                .with_source(source),
        );

        let id = scene.next_id();
        scene.spawn(
            SceneObject::new(id, ObjectKind::Orbit)
                .with_tag(format!("{}-orbit", planet.name()))
                .with_shape(Shape::Ring { radius: planet.distance_from_sun() as f32 })
                .with_source(source),
        );

        for (m, moon) in planet.moons().iter().enumerate() {
            let source = EntityRef::Moon { system: system_index, planet: p, moon: m };

            let id = scene.next_id();
            scene.spawn(
                SceneObject::new(id, ObjectKind::Moon)
                    .with_tag(moon.name())
                    .with_position(moon_position(position, moon))
                    .with_shape(Shape::Sphere { radius: moon.radius() as f32 })
                    .with_source(source),
            );

            let id = scene.next_id();
            scene.spawn(
                SceneObject::new(id, ObjectKind::Orbit)
                    .with_tag(format!("{}-orbit", moon.name()))
                    .with_position(position)
                    .with_shape(Shape::Ring { radius: moon.distance_from_planet() as f32 })
                    .with_source(source),
            );
        }
    }

    log::debug!("drew system {} ({} objects)", system.name(), scene.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;

    fn system() -> StarSystem {
        let moons = vec![
            Moon::new("s0-p0-m0", Coordinate::new(0.0, 0.0, 1.0), 10.0, 120.0),
            Moon::new("s0-p0-m1", Coordinate::new(-1.0, 0.0, 0.0), 20.0, 190.0),
        ];
        let planets = vec![
            Planet::new("s0-p0", Coordinate::new(1.0, 0.0, 0.0), 60.0, 400.0, moons),
            Planet::new("s0-p1", Coordinate::new(0.0, 0.0, -1.0), 90.0, 900.0, Vec::new()),
        ];
        StarSystem::new("s0", Coordinate::new(100.0, 0.0, -300.0), planets)
    }

    #[test]
    fn galaxy_view_has_one_star_per_system() {
        let galaxy = Galaxy::new("g1", vec![system(), StarSystem::new("s1", Coordinate::ORIGIN, Vec::new())]);
        let mut scene = Scene::new();
        draw_galaxy(&galaxy, &mut scene);

        assert_eq!(scene.len(), 3);
        assert_eq!(scene.pickable_count(), 2);
        let star = scene.find_by_source(EntityRef::System { system: 0 }).unwrap();
        assert_eq!(star.position, Vec3::new(100.0, 0.0, -300.0));
        assert_eq!(star.tag, "s0");
    }

    #[test]
    fn system_view_places_bodies_along_orbits() {
        let mut scene = Scene::new();
        draw_system(&system(), 0, &mut scene);

        // light + sun + 2 × (planet + orbit) + 2 × (moon + orbit)
        assert_eq!(scene.len(), 10);
        assert_eq!(scene.pickable_count(), 4);

        let p0 = scene.find_by_tag("s0-p0").unwrap();
        assert_eq!(p0.position, Vec3::new(400.0, 0.0, 0.0));

        let m0 = scene.find_by_tag("s0-p0-m0").unwrap();
        assert_eq!(m0.position, Vec3::new(400.0, 0.0, 120.0));

        let m1_orbit = scene.find_by_tag("s0-p0-m1-orbit").unwrap();
        assert_eq!(m1_orbit.position, p0.position);
        assert_eq!(m1_orbit.shape, Shape::Ring { radius: 190.0 });

        let p1_orbit = scene.find_by_tag("s0-p1-orbit").unwrap();
        assert_eq!(p1_orbit.position, Vec3::ZERO);
        assert_eq!(p1_orbit.shape, Shape::Ring { radius: 900.0 });
    }

    #[test]
    fn redraw_replaces_previous_contents() {
        let galaxy = Galaxy::new("g1", vec![system()]);
        let mut scene = Scene::new();
        draw_system(&galaxy.systems()[0], 0, &mut scene);
        draw_galaxy(&galaxy, &mut scene);
        assert_eq!(scene.len(), 2);
        assert!(scene.find_by_tag("s0-p0").is_none());
    }

    #[test]
    fn orbit_ring_is_closed_loop() {
        let center = Vec3::new(10.0, 5.0, -10.0);
        let points = orbit_ring_points(50.0, center, ORBIT_RESOLUTION);
        assert_eq!(points.len(), ORBIT_RESOLUTION + 1);
        assert!((points[0] - points[ORBIT_RESOLUTION]).length() < 1e-3);
        for p in &points {
            assert!(((*p - center).length() - 50.0).abs() < 1e-3);
            assert_eq!(p.y, center.y);
        }
    }
}
