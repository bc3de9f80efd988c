use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::extensions::easing::Easing;
use crate::generator::config::GenerationConfig;
use crate::interaction::picker::Viewport;

/// Configuration for the explorer, provided by the UI shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExplorerConfig {
    /// Ranges used whenever a galaxy is generated.
    pub generation: GenerationConfig,
    /// Length of the focus transition in milliseconds (default: 500).
    pub focus_duration_ms: f32,
    pub focus_easing: Easing,
    /// Camera position while viewing the whole galaxy.
    pub galaxy_camera: Vec3,
    /// Camera position while viewing one star system.
    pub system_camera: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial viewport size in pixels, until the first resize.
    pub viewport: Viewport,
    /// Extra radius granted to every pickable sphere.
    pub pick_padding: f32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            focus_duration_ms: 500.0,
            focus_easing: Easing::Linear,
            galaxy_camera: Vec3::new(0.0, 1000.0, 2000.0),
            system_camera: Vec3::new(0.0, 0.0, 2000.0),
            fov_y_degrees: 45.0,
            near: 1.0,
            far: 100_000.0,
            viewport: Viewport::new(800.0, 600.0),
            pick_padding: 0.0,
        }
    }
}

impl ExplorerConfig {
    /// Parse from JSON. Missing fields keep their defaults; the result is validated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.validate()?;
        positive("focusDurationMs", self.focus_duration_ms)?;
        positive("fovYDegrees", self.fov_y_degrees)?;
        if self.fov_y_degrees >= 180.0 {
            return Err(ConfigError::InvalidSetting {
                field: "fovYDegrees",
                value: self.fov_y_degrees as f64,
            });
        }
        positive("near", self.near)?;
        if !(self.far > self.near) || !self.far.is_finite() {
            return Err(ConfigError::InvalidSetting {
                field: "far",
                value: self.far as f64,
            });
        }
        if !self.pick_padding.is_finite() || self.pick_padding < 0.0 {
            return Err(ConfigError::InvalidSetting {
                field: "pickPadding",
                value: self.pick_padding as f64,
            });
        }
        finite_position("galaxyCamera", self.galaxy_camera)?;
        finite_position("systemCamera", self.system_camera)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSetting {
            field,
            value: value as f64,
        })
    }
}

fn finite_position(field: &'static str, position: Vec3) -> Result<(), ConfigError> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite {
            field,
            value: position.element_sum() as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::config::IntRange;

    #[test]
    fn default_is_valid() {
        let config = ExplorerConfig::default();
        config.validate().unwrap();
        assert_eq!(config.focus_duration_ms, 500.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ExplorerConfig::from_json(
            r#"{ "focusDurationMs": 250, "focusEasing": "quadOut", "generation": { "systemCount": { "min": 2, "max": 2 } } }"#,
        )
        .unwrap();
        assert_eq!(config.focus_duration_ms, 250.0);
        assert_eq!(config.focus_easing, Easing::QuadOut);
        assert_eq!(config.generation.system_count, IntRange::new(2.0, 2.0));
        assert_eq!(config.generation.planet_count_per_system, IntRange::new(3.0, 12.0));
        assert_eq!(config.system_camera, Vec3::new(0.0, 0.0, 2000.0));
    }

    #[test]
    fn camera_positions_parse_as_arrays() {
        let config = ExplorerConfig::from_json(r#"{ "galaxyCamera": [0, 500, 500] }"#).unwrap();
        assert_eq!(config.galaxy_camera, Vec3::new(0.0, 500.0, 500.0));
    }

    #[test]
    fn zero_duration_rejected() {
        let err = ExplorerConfig::from_json(r#"{ "focusDurationMs": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting { field: "focusDurationMs", .. }));
    }

    #[test]
    fn far_must_exceed_near() {
        let config = ExplorerConfig {
            near: 10.0,
            far: 5.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSetting { field: "far", .. })));
    }

    #[test]
    fn nested_generation_errors_surface() {
        let err = ExplorerConfig::from_json(r#"{ "generation": { "moonRadius": { "min": 30, "max": 10 } } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvertedRange { field: "moonRadius", .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(ExplorerConfig::from_json("{"), Err(ConfigError::ParseError(_))));
    }
}
