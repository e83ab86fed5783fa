//! Perimeter wall segments per room, before any door carving.

use crate::config::GenerationConfig;
use crate::geometry::Side;
use crate::model::{Room, WallSegment};

/// Four segments per room in south, north, west, east order, indexed by room id.
///
/// Walls shared by two rooms appear once for each room; carving works per room and side.
pub fn build_room_wall_segments(rooms: &[Room], config: &GenerationConfig) -> Vec<Vec<WallSegment>> {
    rooms
        .iter()
        .map(|room| {
            let r = room.rect;
            let segment = |side, x1, y1, x2, y2| WallSegment {
                room_id: room.id,
                side,
                x1,
                y1,
                x2,
                y2,
                height: config.wall_height,
                thickness: config.wall_thickness,
            };
            vec![
                segment(Side::South, r.min_x, r.min_y, r.max_x, r.min_y),
                segment(Side::North, r.min_x, r.max_y, r.max_x, r.max_y),
                segment(Side::West, r.min_x, r.min_y, r.min_x, r.max_y),
                segment(Side::East, r.max_x, r.min_y, r.max_x, r.max_y),
            ]
        })
        .collect()
}
