pub mod building;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod manifest;
pub mod model;

pub use building::{Building, BuildingGenerator, FloorLayout, generate_building};
pub use config::GenerationConfig;
pub use error::{BuildError, ConfigError, GeometryError, ManifestError};
pub use geometry::{Axis, Point3, Rect, Side, snap};
pub use manifest::{CleanupPlan, ExportManifest, ExportSettings};
pub use model::*;
