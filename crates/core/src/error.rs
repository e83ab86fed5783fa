//! Error taxonomy for configuration, per-floor geometry, and manifest output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::{Rect, Side};
use crate::model::RoomId;

/// Rejected input, raised before any floor is generated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("footprint {width}x{depth} is below the minimum usable size of {minimum}")]
    FootprintTooSmall { width: f64, depth: f64, minimum: f64 },
    #[error("footprint {width}x{depth} exceeds the maximum of {maximum} per side")]
    FootprintTooLarge { width: f64, depth: f64, maximum: f64 },
    #[error("dedupe precision of {precision} decimals exceeds the supported maximum of {maximum}")]
    DedupePrecisionTooHigh { precision: u32, maximum: u32 },
    #[error("building must have at least one floor")]
    NoFloors,
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("door width {door_width} does not fit a minimum-size room wall of {min_room_size}")]
    DoorWiderThanRoom { door_width: f64, min_room_size: f64 },
    #[error("unknown roof type '{0}' (expected flat, gabled, shed or hip)")]
    UnknownRoofType(String),
    #[error("failed to read config file {path}: {message}")]
    Io { path: PathBuf, message: String },
    #[error("invalid config file: {0}")]
    Parse(String),
}

/// A geometric precondition that failed while a floor was being derived.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("rectangle {rect:?} has non-finite or inverted bounds")]
    InvalidRect { rect: Rect },
    #[error(
        "door opening of width {opening_width} exceeds the {segment_length} {side:?} wall of room {room}"
    )]
    OpeningTooWide { room: RoomId, side: Side, opening_width: f64, segment_length: f64 },
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),
    #[error("generation failed on floor {floor_index}")]
    Generation {
        floor_index: u32,
        #[source]
        source: GeometryError,
    },
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
