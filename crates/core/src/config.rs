//! Dimensional constants and tolerances for generation, captured once per generator.
//!
//! Every stage receives the same [`GenerationConfig`] by reference; nothing reads
//! process-wide state. Config files are TOML and may name only the keys they override.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Scaled endpoint keys stay exact in `i64` for coordinates up to about 9e9 at this precision.
pub const MAX_DEDUPE_PRECISION: u32 = 9;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub grid: f64,
    pub epsilon: f64,

    pub wall_thickness: f64,
    pub wall_height: f64,
    pub floor_thickness: f64,
    pub ceiling_thickness: f64,
    pub story_height: f64,

    pub door_width: f64,
    pub door_height: f64,

    pub corridor_width: f64,
    pub min_room_size: f64,
    /// Largest accepted footprint side; bounds the room count of a floor.
    pub max_footprint: f64,

    pub roof_height: f64,

    pub merge_distance: f64,
    pub dissolve_angle: f64,
    /// Decimal places kept when comparing segment endpoints for duplicates.
    pub dedupe_precision: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            grid: 0.25,
            epsilon: 1e-4,
            wall_thickness: 0.20,
            wall_height: 3.0,
            floor_thickness: 0.20,
            ceiling_thickness: 0.15,
            story_height: 3.2,
            door_width: 0.9,
            door_height: 2.1,
            corridor_width: 1.8,
            min_room_size: 2.5,
            max_footprint: 250.0,
            roof_height: 1.2,
            merge_distance: 5e-4,
            dissolve_angle: 0.01,
            dedupe_precision: 5,
        }
    }
}

impl GenerationConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("grid", self.grid),
            ("epsilon", self.epsilon),
            ("wall_thickness", self.wall_thickness),
            ("wall_height", self.wall_height),
            ("floor_thickness", self.floor_thickness),
            ("ceiling_thickness", self.ceiling_thickness),
            ("story_height", self.story_height),
            ("door_width", self.door_width),
            ("door_height", self.door_height),
            ("corridor_width", self.corridor_width),
            ("min_room_size", self.min_room_size),
            ("max_footprint", self.max_footprint),
            ("roof_height", self.roof_height),
            ("merge_distance", self.merge_distance),
            ("dissolve_angle", self.dissolve_angle),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.door_width >= self.min_room_size {
            return Err(ConfigError::DoorWiderThanRoom {
                door_width: self.door_width,
                min_room_size: self.min_room_size,
            });
        }
        if self.dedupe_precision > MAX_DEDUPE_PRECISION {
            return Err(ConfigError::DedupePrecisionTooHigh {
                precision: self.dedupe_precision,
                maximum: MAX_DEDUPE_PRECISION,
            });
        }
        Ok(())
    }

    /// Factor applied before rounding endpoint coordinates for duplicate detection.
    pub fn dedupe_scale(&self) -> f64 {
        10_f64.powi(self.dedupe_precision as i32)
    }
}
