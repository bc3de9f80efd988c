use rand::Rng;

use super::config::GenerationConfig;
use super::naming::{galaxy_name, moon_name, planet_name, system_name};
use super::sampling::{draw_angle, draw_inclusive, unit_circle};
use crate::error::ConfigError;
use crate::model::{Coordinate, Galaxy, Moon, Planet, StarSystem};

/// Generate a complete galaxy, named from the system clock.
/// Not built for wasm32; use `generate_galaxy_at` there.
#[cfg(not(target_arch = "wasm32"))]
pub fn generate_galaxy<R: Rng>(config: &GenerationConfig, rng: &mut R) -> Result<Galaxy, ConfigError> {
    generate_galaxy_at(config, rng, super::naming::now_millis())
}

/// Generate a complete galaxy with a caller-supplied clock reading.
///
/// The config is validated before any draw; the whole tree is built in one
/// pass and returned only once complete.
pub fn generate_galaxy_at<R: Rng>(
    config: &GenerationConfig,
    rng: &mut R,
    now_millis: u64,
) -> Result<Galaxy, ConfigError> {
    config.validate()?;

    let system_total = config.loop_mode.count(config.system_count.draw(rng));
    let systems: Vec<StarSystem> = (0..system_total)
        .map(|i| generate_system(config, rng, i))
        .collect();

    let galaxy = Galaxy::new(galaxy_name(now_millis), systems);
    log::info!(
        "generated galaxy {}: {} systems, {} planets, {} moons",
        galaxy.name(),
        galaxy.systems().len(),
        galaxy.planet_count(),
        galaxy.moon_count()
    );
    Ok(galaxy)
}

fn generate_system<R: Rng>(config: &GenerationConfig, rng: &mut R, index: usize) -> StarSystem {
    let span = config.system_span;
    let mut axis = || draw_inclusive(rng, -span, span) as f64;
    let coords = Coordinate::new(axis(), axis(), axis());

    let planet_total = config.loop_mode.count(config.planet_count_per_system.draw(rng));
    let mut distance_from_sun = 0.0_f64;
    let planets = (0..planet_total)
        .map(|j| {
            distance_from_sun += config.planet_orbit_increment.draw(rng) as f64;
            generate_planet(config, rng, index, j, distance_from_sun)
        })
        .collect();

    StarSystem::new(system_name(index), coords, planets)
}

fn generate_planet<R: Rng>(
    config: &GenerationConfig,
    rng: &mut R,
    system: usize,
    index: usize,
    distance_from_sun: f64,
) -> Planet {
    let coords = unit_circle(draw_angle(rng));
    let radius = config.planet_radius.draw(rng) as f64;

    let moon_total = config.loop_mode.count(config.moon_count_per_planet.draw(rng));
    let mut distance_from_planet = radius;
    let moons = (0..moon_total)
        .map(|k| {
            distance_from_planet += config.moon_orbit_increment.draw(rng) as f64;
            let coords = unit_circle(draw_angle(rng));
            let radius = config.moon_radius.draw(rng) as f64;
            Moon::new(moon_name(system, index, k), coords, radius, distance_from_planet)
        })
        .collect();

    Planet::new(planet_name(system, index), coords, radius, distance_from_sun, moons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::config::{IntRange, LoopMode};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn galaxy(seed: u64, config: &GenerationConfig) -> Galaxy {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_galaxy(config, &mut rng).unwrap()
    }

    #[test]
    fn counts_within_ranges() {
        let config = GenerationConfig::default();
        for seed in 0..20 {
            let g = galaxy(seed, &config);
            assert!((3..=8).contains(&g.systems().len()), "systems: {}", g.systems().len());
            for s in g.systems() {
                assert!((3..=12).contains(&s.planets().len()));
                for p in s.planets() {
                    assert!(p.moons().len() <= 4);
                }
            }
        }
    }

    #[test]
    fn system_positions_within_span() {
        let g = galaxy(4, &GenerationConfig::default());
        for s in g.systems() {
            let c = s.coords();
            for v in [c.x, c.y, c.z] {
                assert!((-500.0..=500.0).contains(&v), "{v}");
                assert_eq!(v.fract(), 0.0);
            }
        }
    }

    #[test]
    fn planet_distances_strictly_increase() {
        let g = galaxy(8, &GenerationConfig::default());
        for s in g.systems() {
            let d: Vec<f64> = s.planets().iter().map(|p| p.distance_from_sun()).collect();
            assert!(d[0] >= 300.0 && d[0] <= 700.0);
            assert!(d.windows(2).all(|w| w[1] > w[0]), "{d:?}");
        }
    }

    #[test]
    fn moon_distances_strictly_increase_beyond_planet() {
        let g = galaxy(15, &GenerationConfig::default());
        for p in g.systems().iter().flat_map(|s| s.planets()) {
            let d: Vec<f64> = p.moons().iter().map(|m| m.distance_from_planet()).collect();
            if let Some(first) = d.first() {
                assert!(*first > p.radius());
            }
            assert!(d.windows(2).all(|w| w[1] > w[0]), "{d:?}");
        }
    }

    #[test]
    fn orbital_coords_on_unit_circle() {
        let g = galaxy(23, &GenerationConfig::default());
        for p in g.systems().iter().flat_map(|s| s.planets()) {
            let coords = std::iter::once(p.coords()).chain(p.moons().iter().map(|m| m.coords()));
            for c in coords {
                assert_eq!(c.y, 0.0);
                assert!((c.x * c.x + c.z * c.z - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn radii_within_ranges() {
        let g = galaxy(42, &GenerationConfig::default());
        for p in g.systems().iter().flat_map(|s| s.planets()) {
            assert!((50.0..=150.0).contains(&p.radius()));
            for m in p.moons() {
                assert!((10.0..=30.0).contains(&m.radius()));
            }
        }
    }

    #[test]
    fn names_pairwise_distinct() {
        let g = galaxy(77, &GenerationConfig::default());
        let names: Vec<&str> = g.names().collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn back_to_back_galaxies_have_distinct_names() {
        let config = GenerationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let a = generate_galaxy(&config, &mut rng).unwrap();
        let b = generate_galaxy(&config, &mut rng).unwrap();
        assert_ne!(a.name(), b.name());
    }

    #[test]
    fn fixed_counts_yield_exact_shape() {
        let config = GenerationConfig {
            system_count: IntRange::fixed(1.0),
            planet_count_per_system: IntRange::fixed(2.0),
            moon_count_per_planet: IntRange::fixed(0.0),
            ..Default::default()
        };
        for seed in 0..10 {
            let g = galaxy(seed, &config);
            assert_eq!(g.systems().len(), 1);
            assert_eq!(g.systems()[0].planets().len(), 2);
            assert!(g.systems()[0].planets().iter().all(|p| p.moons().is_empty()));
        }
    }

    #[test]
    fn legacy_loops_add_one_per_level() {
        let config = GenerationConfig {
            system_count: IntRange::fixed(1.0),
            planet_count_per_system: IntRange::fixed(2.0),
            moon_count_per_planet: IntRange::fixed(0.0),
            loop_mode: LoopMode::Legacy,
            ..Default::default()
        };
        let g = galaxy(3, &config);
        assert_eq!(g.systems().len(), 2);
        assert!(g.systems().iter().all(|s| s.planets().len() == 3));
        assert!(g
            .systems()
            .iter()
            .flat_map(|s| s.planets())
            .all(|p| p.moons().len() == 1));
    }

    #[test]
    fn large_orbits_stay_exact() {
        let config = GenerationConfig {
            system_count: IntRange::fixed(1.0),
            planet_count_per_system: IntRange::fixed(2.0),
            planet_radius: IntRange::fixed(20_000_001.0),
            planet_orbit_increment: IntRange::fixed(1.0),
            moon_count_per_planet: IntRange::fixed(2.0),
            moon_orbit_increment: IntRange::fixed(1.0),
            ..Default::default()
        };
        let g = galaxy(0, &config);
        let planets = g.systems()[0].planets();
        assert_eq!(planets[0].distance_from_sun(), 1.0);
        assert_eq!(planets[1].distance_from_sun(), 2.0);

        let p = &planets[0];
        assert_eq!(p.radius(), 20_000_001.0);
        let d: Vec<f64> = p.moons().iter().map(|m| m.distance_from_planet()).collect();
        assert_eq!(d, vec![20_000_002.0, 20_000_003.0]);
    }

    #[test]
    fn same_seed_same_shape() {
        let config = GenerationConfig::default();
        let a = galaxy(2024, &config);
        let b = galaxy(2024, &config);
        assert_eq!(a.systems(), b.systems());
    }

    #[test]
    fn zero_systems_is_valid() {
        let config = GenerationConfig {
            system_count: IntRange::fixed(0.0),
            ..Default::default()
        };
        let g = galaxy(0, &config);
        assert!(g.systems().is_empty());
    }

    #[test]
    fn invalid_config_is_signalled() {
        let config = GenerationConfig {
            system_count: IntRange::new(8.0, 3.0),
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            generate_galaxy(&config, &mut rng),
            Err(ConfigError::InvertedRange { field: "systemCount", .. })
        ));
    }
}
