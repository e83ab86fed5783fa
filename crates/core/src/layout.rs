//! Per-floor layout derivation split into coherent submodules.

pub mod adjacency;
pub mod cleanup;
pub mod doors;
pub mod floorplan;
pub mod roof;
pub mod slabs;
pub mod walls;

mod seed;

pub use adjacency::{AdjacencyMap, CorridorFacing, build_adjacency, corridor_facing_walls};
pub use cleanup::{cleanup_segments, dedupe_segments, remove_zero_length_segments};
pub use doors::{carve_doors, corridor_door_openings};
pub use floorplan::{Floorplan, generate_floorplan};
pub use roof::{RoofFace, RoofGeometry, build_roof};
pub use slabs::{build_floor_ceiling_slabs, build_navmesh_slabs};
pub use walls::build_room_wall_segments;
