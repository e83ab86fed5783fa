//! Floor and ceiling slab descriptors.

use crate::config::GenerationConfig;
use crate::geometry::Rect;
use crate::model::{Room, Slab, SlabKind};

/// Floor and ceiling slabs over the rooms' bounding rectangle; empty when there are no rooms.
pub fn build_floor_ceiling_slabs(
    rooms: &[Room],
    floor_index: u32,
    config: &GenerationConfig,
) -> Vec<Slab> {
    let Some(footprint) = Rect::bounding(rooms.iter().map(|room| room.rect)) else {
        return Vec::new();
    };

    let floor_z = f64::from(floor_index) * config.story_height;
    let ceiling_z = floor_z + config.story_height - config.ceiling_thickness;

    vec![
        Slab {
            rect: footprint,
            z: floor_z,
            thickness: config.floor_thickness,
            kind: SlabKind::Floor,
        },
        Slab {
            rect: footprint,
            z: ceiling_z,
            thickness: config.ceiling_thickness,
            kind: SlabKind::Ceiling,
        },
    ]
}

/// Walkable slabs handed to navmesh generation.
pub fn build_navmesh_slabs(slabs: &[Slab]) -> Vec<Slab> {
    slabs.iter().filter(|slab| slab.kind == SlabKind::Floor).copied().collect()
}
