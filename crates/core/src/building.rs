//! High-level building generation that composes the per-floor layout stages and the roof.

mod canonical;

use serde::Serialize;

use crate::config::GenerationConfig;
use crate::error::{BuildError, GeometryError};
use crate::geometry::Rect;
use crate::layout::{
    AdjacencyMap, Floorplan, RoofGeometry, build_adjacency, build_floor_ceiling_slabs,
    build_navmesh_slabs, build_roof, build_room_wall_segments, carve_doors, cleanup_segments,
    corridor_door_openings, corridor_facing_walls, generate_floorplan,
};
use crate::model::{BuildingSpec, Corridor, DoorOpening, Room, Slab, WallSegment};

/// Everything derived for one floor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FloorLayout {
    pub floor_index: u32,
    pub rooms: Vec<Room>,
    pub corridor: Corridor,
    pub adjacency: AdjacencyMap,
    pub doors: Vec<DoorOpening>,
    /// Carved and cleaned walls of every room on the floor.
    pub walls: Vec<WallSegment>,
    pub slabs: Vec<Slab>,
    pub navmesh_slabs: Vec<Slab>,
}

impl FloorLayout {
    /// Bounding rectangle of the floor's rooms.
    pub fn footprint(&self) -> Option<Rect> {
        Rect::bounding(self.rooms.iter().map(|room| room.rect))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Building {
    pub spec: BuildingSpec,
    pub floors: Vec<FloorLayout>,
    /// Absent when no floor produced a room.
    pub roof: Option<RoofGeometry>,
}

impl Building {
    pub fn room_count(&self) -> usize {
        self.floors.iter().map(|floor| floor.rooms.len()).sum()
    }

    pub fn door_count(&self) -> usize {
        self.floors.iter().map(|floor| floor.doors.len()).sum()
    }

    pub fn wall_count(&self) -> usize {
        self.floors.iter().map(|floor| floor.walls.len()).sum()
    }
}

pub struct BuildingGenerator {
    config: GenerationConfig,
}

impl BuildingGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Validates the inputs, then generates every floor and the roof over the topmost one.
    pub fn generate(&self, spec: &BuildingSpec) -> Result<Building, BuildError> {
        self.config.validate()?;
        spec.validate(&self.config)?;

        log::info!(
            "Generating building {}x{} ({} floors, seed {}, {} roof)",
            spec.width,
            spec.depth,
            spec.floors,
            spec.seed,
            spec.roof_type
        );

        let floors = (0..spec.floors)
            .map(|floor_index| {
                self.generate_floor(spec, floor_index)
                    .map_err(|source| BuildError::Generation { floor_index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let roof = self.build_top_roof(&floors, spec);
        let building = Building { spec: spec.clone(), floors, roof };

        log::info!(
            "Building generated: {} rooms, {} doors, {} wall segments, fingerprint {:016x}",
            building.room_count(),
            building.door_count(),
            building.wall_count(),
            building.fingerprint()
        );
        Ok(building)
    }

    /// Runs the full layout chain for one floor: partition, adjacency, walls, doors, slabs.
    pub fn generate_floor(
        &self,
        spec: &BuildingSpec,
        floor_index: u32,
    ) -> Result<FloorLayout, GeometryError> {
        let config = &self.config;
        let Floorplan { rooms, corridor } =
            generate_floorplan(spec.width, spec.depth, spec.seed, floor_index, config);
        corridor.rect.validated()?;
        for room in &rooms {
            room.rect.validated()?;
        }

        let adjacency = build_adjacency(&rooms, config);
        let walls_by_room = build_room_wall_segments(&rooms, config);
        let facing = corridor_facing_walls(&rooms, &corridor, config);
        let doors = corridor_door_openings(&facing, &rooms, config);
        let carved = carve_doors(&walls_by_room, &doors, config)?;
        let walls = cleanup_segments(carved.into_iter().flatten(), config);

        let slabs = build_floor_ceiling_slabs(&rooms, floor_index, config);
        let navmesh_slabs = build_navmesh_slabs(&slabs);

        if rooms.is_empty() {
            log::warn!(
                "Floor {floor_index} produced no rooms ({}x{} footprint is too narrow beside the corridor)",
                spec.width,
                spec.depth
            );
        }
        log::debug!(
            "Floor {floor_index}: {} rooms, {} doors, {} wall segments",
            rooms.len(),
            doors.len(),
            walls.len()
        );

        Ok(FloorLayout { floor_index, rooms, corridor, adjacency, doors, walls, slabs, navmesh_slabs })
    }

    fn build_top_roof(&self, floors: &[FloorLayout], spec: &BuildingSpec) -> Option<RoofGeometry> {
        let top = floors.iter().rev().find_map(|floor| {
            let footprint = floor.footprint()?;
            let base_z = f64::from(floor.floor_index + 1) * self.config.story_height;
            Some((footprint, base_z))
        });
        let Some((footprint, base_z)) = top else {
            log::warn!("No floor produced rooms; skipping the roof");
            return None;
        };
        Some(build_roof(&footprint, base_z, spec.roof_type, &self.config))
    }
}

pub fn generate_building(
    spec: &BuildingSpec,
    config: &GenerationConfig,
) -> Result<Building, BuildError> {
    BuildingGenerator::new(config.clone()).generate(spec)
}
