use glam::Vec3;
use serde::Serialize;

/// A point in generator space. Kept in f64 so integer draws survive exactly;
/// the renderer narrows to f32.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<Vec3> for Coordinate {
    fn from(v: Vec3) -> Self {
        Self::new(v.x as f64, v.y as f64, v.z as f64)
    }
}

impl From<Coordinate> for Vec3 {
    fn from(c: Coordinate) -> Self {
        c.to_vec3()
    }
}

/// A moon orbiting a planet.
///
/// `coords` is the unit-circle direction on the orbital plane; the renderer
/// scales it by `distance_from_planet` when placing the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Moon {
    name: String,
    coords: Coordinate,
    radius: f64,
    distance_from_planet: f64,
}

impl Moon {
    pub fn new(name: impl Into<String>, coords: Coordinate, radius: f64, distance_from_planet: f64) -> Self {
        Self {
            name: name.into(),
            coords,
            radius,
            distance_from_planet,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coords(&self) -> Coordinate {
        self.coords
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Orbital distance from the parent planet's center. Always greater than the planet's radius.
    pub fn distance_from_planet(&self) -> f64 {
        self.distance_from_planet
    }
}

/// A planet orbiting a system's sun. Owns its moons.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    name: String,
    coords: Coordinate,
    radius: f64,
    distance_from_sun: f64,
    moons: Vec<Moon>,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        coords: Coordinate,
        radius: f64,
        distance_from_sun: f64,
        moons: Vec<Moon>,
    ) -> Self {
        Self {
            name: name.into(),
            coords,
            radius,
            distance_from_sun,
            moons,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit-circle direction on the orbital plane (not scaled by distance).
    pub fn coords(&self) -> Coordinate {
        self.coords
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn distance_from_sun(&self) -> f64 {
        self.distance_from_sun
    }

    /// Moons in orbital order, innermost first.
    pub fn moons(&self) -> &[Moon] {
        &self.moons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_vec3_conversion() {
        let c = Coordinate::new(1.0, -2.0, 3.5);
        let v: Vec3 = c.into();
        assert_eq!(v, Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(Coordinate::from(v), c);
    }

    #[test]
    fn planet_owns_moons_in_order() {
        let moons = vec![
            Moon::new("s0-p0-m0", Coordinate::new(1.0, 0.0, 0.0), 10.0, 80.0),
            Moon::new("s0-p0-m1", Coordinate::new(0.0, 0.0, 1.0), 12.0, 140.0),
        ];
        let planet = Planet::new("s0-p0", Coordinate::new(0.0, 0.0, -1.0), 50.0, 400.0, moons);
        assert_eq!(planet.moons().len(), 2);
        assert_eq!(planet.moons()[1].name(), "s0-p0-m1");
        assert!(planet.moons()[0].distance_from_planet() > planet.radius());
    }

    #[test]
    fn moon_serializes_camel_case() {
        let moon = Moon::new("s1-p2-m0", Coordinate::new(1.0, 0.0, 0.0), 15.0, 90.0);
        let json = serde_json::to_string(&moon).unwrap();
        assert!(json.contains("\"distanceFromPlanet\":90.0"), "{json}");
    }
}
