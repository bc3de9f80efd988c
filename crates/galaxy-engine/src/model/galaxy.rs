use serde::Serialize;

use super::bodies::{Coordinate, Planet};

/// A star and its planets, positioned in galaxy space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarSystem {
    name: String,
    coords: Coordinate,
    planets: Vec<Planet>,
}

impl StarSystem {
    pub fn new(name: impl Into<String>, coords: Coordinate, planets: Vec<Planet>) -> Self {
        Self {
            name: name.into(),
            coords,
            planets,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in the galaxy view (not an orbital distance).
    pub fn coords(&self) -> Coordinate {
        self.coords
    }

    /// Planets in orbital order, innermost first.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }
}

/// Root of a generated universe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Galaxy {
    name: String,
    systems: Vec<StarSystem>,
}

impl Galaxy {
    pub fn new(name: impl Into<String>, systems: Vec<StarSystem>) -> Self {
        Self {
            name: name.into(),
            systems,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn systems(&self) -> &[StarSystem] {
        &self.systems
    }

    pub fn system(&self, index: usize) -> Option<&StarSystem> {
        self.systems.get(index)
    }

    pub fn planet_count(&self) -> usize {
        self.systems.iter().map(|s| s.planets.len()).sum()
    }

    pub fn moon_count(&self) -> usize {
        self.systems
            .iter()
            .flat_map(|s| s.planets.iter())
            .map(|p| p.moons().len())
            .sum()
    }

    /// Every entity name in the tree, depth-first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.systems.iter().flat_map(|s| {
            std::iter::once(s.name()).chain(s.planets.iter().flat_map(|p| {
                std::iter::once(p.name()).chain(p.moons().iter().map(|m| m.name()))
            }))
        })
    }

    /// Look up an entity by its index path.
    pub fn resolve(&self, entity: EntityRef) -> Option<EntityInfo<'_>> {
        match entity {
            EntityRef::System { system } => {
                let s = self.systems.get(system)?;
                Some(EntityInfo {
                    kind: EntityKind::System,
                    name: s.name(),
                    coords: s.coords(),
                    radius: None,
                    orbit_distance: None,
                })
            }
            EntityRef::Planet { system, planet } => {
                let p = self.systems.get(system)?.planets.get(planet)?;
                Some(EntityInfo {
                    kind: EntityKind::Planet,
                    name: p.name(),
                    coords: p.coords(),
                    radius: Some(p.radius()),
                    orbit_distance: Some(p.distance_from_sun()),
                })
            }
            EntityRef::Moon { system, planet, moon } => {
                let m = self
                    .systems
                    .get(system)?
                    .planets
                    .get(planet)?
                    .moons()
                    .get(moon)?;
                Some(EntityInfo {
                    kind: EntityKind::Moon,
                    name: m.name(),
                    coords: m.coords(),
                    radius: Some(m.radius()),
                    orbit_distance: Some(m.distance_from_planet()),
                })
            }
        }
    }
}

/// Index path from the galaxy root to one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntityRef {
    System { system: usize },
    Planet { system: usize, planet: usize },
    Moon { system: usize, planet: usize, moon: usize },
}

impl EntityRef {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::System { .. } => EntityKind::System,
            EntityRef::Planet { .. } => EntityKind::Planet,
            EntityRef::Moon { .. } => EntityKind::Moon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    System,
    Planet,
    Moon,
}

/// Borrowed view of an entity, as handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityInfo<'a> {
    pub kind: EntityKind,
    pub name: &'a str,
    pub coords: Coordinate,
    /// None for systems.
    pub radius: Option<f64>,
    /// Distance from sun for planets, from planet for moons, None for systems.
    pub orbit_distance: Option<f64>,
}
