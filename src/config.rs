use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::hit_testing::DEFAULT_HIT_RADIUS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Tunables for the editor. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Drawing area in pixels.
    pub canvas_size: Vec2,
    /// Larger side of the shape handed to the host, at most.
    pub host_target_width: f32,
    /// Pick radius around anchor and handle glyphs.
    pub hit_radius: f32,
    pub grid_spacing: f32,
    pub default_background_opacity: f32,
    /// Where the host should place inserted shapes.
    pub insert_position: Pos2,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_size: Vec2::new(600.0, 400.0),
            host_target_width: 200.0,
            hit_radius: DEFAULT_HIT_RADIUS,
            grid_spacing: 20.0,
            default_background_opacity: 0.5,
            insert_position: Pos2::ZERO,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_size.x > 0.0 && self.canvas_size.y > 0.0) {
            return Err(ConfigError::InvalidValue(format!(
                "canvas_size must be positive, got {:?}",
                self.canvas_size
            )));
        }
        if !(self.host_target_width > 0.0) {
            return Err(ConfigError::InvalidValue(format!(
                "host_target_width must be positive, got {}",
                self.host_target_width
            )));
        }
        if !(self.hit_radius > 0.0 && self.grid_spacing > 0.0) {
            return Err(ConfigError::InvalidValue(
                "hit_radius and grid_spacing must be positive".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.default_background_opacity) {
            return Err(ConfigError::InvalidValue(format!(
                "default_background_opacity must be in [0, 1], got {}",
                self.default_background_opacity
            )));
        }
        Ok(())
    }
}
