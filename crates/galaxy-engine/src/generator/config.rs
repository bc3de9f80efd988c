use rand::Rng;
use serde::{Deserialize, Serialize};

use super::sampling::draw_inclusive;
use crate::error::ConfigError;

/// Inclusive integer range. Bounds are normalized with ceil/floor when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: f64,
    pub max: f64,
}

impl IntRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range that always draws `value`.
    pub const fn fixed(value: f64) -> Self {
        Self { min: value, max: value }
    }

    pub fn draw<R: Rng>(&self, rng: &mut R) -> i64 {
        draw_inclusive(rng, self.min, self.max)
    }

    /// Smallest and largest value a draw can produce.
    pub fn bounds(&self) -> (i64, i64) {
        (self.min.ceil() as i64, self.max.floor() as i64)
    }

    /// Rejects non-finite, inverted, and integer-free ranges.
    pub fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        for value in [self.min, self.max] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        if self.min.ceil() > self.max.floor() {
            return Err(ConfigError::EmptyRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    fn validate_count(&self, field: &'static str) -> Result<(), ConfigError> {
        self.validate(field)?;
        if self.min.ceil() < 0.0 {
            return Err(ConfigError::Negative { field, value: self.min });
        }
        Ok(())
    }

    fn validate_positive(&self, field: &'static str) -> Result<(), ConfigError> {
        self.validate(field)?;
        if self.min.ceil() < 1.0 {
            return Err(ConfigError::NonPositive { field, value: self.min });
        }
        Ok(())
    }
}

/// How drawn counts translate into generated bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// A drawn count of `n` produces `n` bodies.
    #[default]
    Exact,
    /// A drawn count of `n` produces `n + 1` bodies at every level.
    Legacy,
}

impl LoopMode {
    pub fn count(self, drawn: i64) -> usize {
        let drawn = drawn.max(0) as usize;
        match self {
            LoopMode::Exact => drawn,
            LoopMode::Legacy => drawn + 1,
        }
    }
}

/// Ranges that bound every random draw of the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Number of star systems in the galaxy.
    pub system_count: IntRange,
    /// Half-width of the cube each system position is drawn from, per axis.
    pub system_span: f64,
    pub planet_count_per_system: IntRange,
    pub planet_radius: IntRange,
    /// Added to the running distance from the sun for each successive planet.
    pub planet_orbit_increment: IntRange,
    pub moon_count_per_planet: IntRange,
    pub moon_radius: IntRange,
    /// Added to the running distance from the planet (seeded at its radius) for each moon.
    pub moon_orbit_increment: IntRange,
    pub loop_mode: LoopMode,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            system_count: IntRange::new(3.0, 8.0),
            system_span: 500.0,
            planet_count_per_system: IntRange::new(3.0, 12.0),
            planet_radius: IntRange::new(50.0, 150.0),
            planet_orbit_increment: IntRange::new(300.0, 700.0),
            moon_count_per_planet: IntRange::new(0.0, 4.0),
            moon_radius: IntRange::new(10.0, 30.0),
            moon_orbit_increment: IntRange::new(50.0, 80.0),
            loop_mode: LoopMode::Exact,
        }
    }
}

impl GenerationConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.system_count.validate_count("systemCount")?;
        if !self.system_span.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "systemSpan",
                value: self.system_span,
            });
        }
        if self.system_span < 0.0 {
            return Err(ConfigError::Negative {
                field: "systemSpan",
                value: self.system_span,
            });
        }
        self.planet_count_per_system.validate_count("planetCountPerSystem")?;
        self.planet_radius.validate_positive("planetRadius")?;
        self.planet_orbit_increment.validate_positive("planetOrbitIncrement")?;
        self.moon_count_per_planet.validate_count("moonCountPerPlanet")?;
        self.moon_radius.validate_positive("moonRadius")?;
        self.moon_orbit_increment.validate_positive("moonOrbitIncrement")?;
        Ok(())
    }
}
