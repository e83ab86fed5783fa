//! Public descriptor types handed from the layout stages to downstream consumers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::error::ConfigError;
use crate::geometry::{Axis, Rect, Side, snap};

/// Dense per-floor room identifier; doubles as the room's index in its floor's room list.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl RoomId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub rect: Rect,
    pub floor_index: u32,
    pub id: RoomId,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    pub rect: Rect,
    pub floor_index: u32,
    /// Axis the corridor runs along. Generated corridors always run along y.
    pub orientation: Axis,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub room_id: RoomId,
    pub side: Side,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub height: f64,
    pub thickness: f64,
}

impl WallSegment {
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoorOpening {
    pub room_id: RoomId,
    pub side: Side,
    pub center: (f64, f64),
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlabKind {
    Floor,
    Ceiling,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slab {
    pub rect: Rect,
    pub z: f64,
    pub thickness: f64,
    pub kind: SlabKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofType {
    Flat,
    Gabled,
    Shed,
    #[default]
    Hip,
}

impl RoofType {
    pub const fn name(self) -> &'static str {
        match self {
            RoofType::Flat => "flat",
            RoofType::Gabled => "gabled",
            RoofType::Shed => "shed",
            RoofType::Hip => "hip",
        }
    }
}

impl fmt::Display for RoofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoofType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(RoofType::Flat),
            "gabled" => Ok(RoofType::Gabled),
            "shed" => Ok(RoofType::Shed),
            "hip" => Ok(RoofType::Hip),
            _ => Err(ConfigError::UnknownRoofType(s.to_string())),
        }
    }
}

/// The sole external input: what to build.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingSpec {
    pub width: f64,
    pub depth: f64,
    pub floors: u32,
    pub seed: u64,
    #[serde(default)]
    pub roof_type: RoofType,
}

impl BuildingSpec {
    /// Rejects specs whose grid-snapped footprint cannot hold a single minimum-size room
    /// or exceeds the configured cap.
    pub fn validate(&self, config: &GenerationConfig) -> Result<(), ConfigError> {
        for (field, value) in [("width", self.width), ("depth", self.depth)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        let width = snap(self.width, config.grid);
        let depth = snap(self.depth, config.grid);
        if width < config.min_room_size || depth < config.min_room_size {
            return Err(ConfigError::FootprintTooSmall {
                width: self.width,
                depth: self.depth,
                minimum: config.min_room_size,
            });
        }
        if width > config.max_footprint || depth > config.max_footprint {
            return Err(ConfigError::FootprintTooLarge {
                width: self.width,
                depth: self.depth,
                maximum: config.max_footprint,
            });
        }
        if self.floors == 0 {
            return Err(ConfigError::NoFloors);
        }
        Ok(())
    }
}
