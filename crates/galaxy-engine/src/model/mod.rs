//! Generated universe: galaxy → star systems → planets → moons.
//!
//! Every value is built once, fully populated, by the generator and never
//! mutated afterwards. Regeneration replaces the whole tree.

pub mod bodies;
pub mod galaxy;

pub use bodies::{Coordinate, Moon, Planet};
pub use galaxy::{EntityInfo, EntityKind, EntityRef, Galaxy, StarSystem};
