//! Export manifest handed to the mesh exporter: asset names, export settings,
//! the cleanup plan to run before export, and a summary of the generated building.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::building::Building;
use crate::config::GenerationConfig;
use crate::error::ManifestError;
use crate::model::RoofType;

pub const MANIFEST_FORMAT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub format: String,
    pub y_up: bool,
    pub apply_modifiers: bool,
    pub apply_scale: bool,
    pub selected_only: bool,
    /// Appended to the building name to form the collider asset name.
    pub collider_suffix: String,
    pub navmesh_collection: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: "GLTF2".to_string(),
            y_up: true,
            apply_modifiers: true,
            apply_scale: true,
            selected_only: true,
            collider_suffix: "-col".to_string(),
            navmesh_collection: "MF_Navmesh".to_string(),
        }
    }
}

/// Mesh cleanup steps the exporter runs on the built geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanupPlan {
    pub merge_distance: f64,
    pub dissolve_angle: f64,
    pub recalc_normals: bool,
    pub remove_degenerate: bool,
    pub delete_loose: bool,
    pub mesh_validate: bool,
}

impl CleanupPlan {
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            merge_distance: config.merge_distance,
            dissolve_angle: config.dissolve_angle,
            recalc_normals: true,
            remove_degenerate: true,
            delete_loose: true,
            mesh_validate: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportAssets {
    pub building: String,
    pub collider: String,
    pub navmesh: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloorSummary {
    pub floor_index: u32,
    pub rooms: usize,
    pub doors: usize,
    pub walls: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportManifest {
    pub format_version: u32,
    pub building_name: String,
    pub seed: u64,
    pub roof_type: RoofType,
    /// Hex-encoded `Building::fingerprint`.
    pub fingerprint: String,
    pub assets: ExportAssets,
    pub settings: ExportSettings,
    pub cleanup: CleanupPlan,
    pub floors: Vec<FloorSummary>,
}

impl ExportManifest {
    pub fn new(
        building_name: &str,
        building: &Building,
        settings: ExportSettings,
        cleanup: CleanupPlan,
    ) -> Self {
        let assets = ExportAssets {
            building: format!("{building_name}.glb"),
            collider: format!("{building_name}{}.glb", settings.collider_suffix),
            navmesh: format!("{building_name}_navmesh.glb"),
        };
        let floors = building
            .floors
            .iter()
            .map(|floor| FloorSummary {
                floor_index: floor.floor_index,
                rooms: floor.rooms.len(),
                doors: floor.doors.len(),
                walls: floor.walls.len(),
            })
            .collect();

        Self {
            format_version: MANIFEST_FORMAT_VERSION,
            building_name: building_name.to_string(),
            seed: building.spec.seed,
            roof_type: building.spec.roof_type,
            fingerprint: format!("{:016x}", building.fingerprint()),
            assets,
            settings,
            cleanup,
            floors,
        }
    }

    pub fn write_atomic(&self, path: &Path) -> Result<(), ManifestError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
