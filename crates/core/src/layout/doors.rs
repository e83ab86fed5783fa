//! Corridor door placement and wall carving that keeps every surviving piece non-degenerate.

use std::collections::HashMap;

use crate::config::GenerationConfig;
use crate::error::GeometryError;
use crate::geometry::{Axis, Side};
use crate::model::{DoorOpening, Room, RoomId, WallSegment};

use super::adjacency::CorridorFacing;

/// One door per room with a corridor-facing side, centered on the first such side.
pub fn corridor_door_openings(
    facing: &CorridorFacing,
    rooms: &[Room],
    config: &GenerationConfig,
) -> Vec<DoorOpening> {
    facing
        .iter()
        .filter_map(|(room_id, sides)| {
            let side = *sides.first()?;
            let rect = rooms.get(room_id.index())?.rect;
            let (mid_x, mid_y) = rect.center();
            let center = match side {
                Side::North => (mid_x, rect.max_y),
                Side::South => (mid_x, rect.min_y),
                Side::East => (rect.max_x, mid_y),
                Side::West => (rect.min_x, mid_y),
            };
            Some(DoorOpening {
                room_id,
                side,
                center,
                width: config.door_width,
                height: config.door_height,
            })
        })
        .collect()
}

/// Replaces each wall that carries an opening with the pieces left on either side of it.
///
/// Walls without an opening pass through untouched. An opening wider than its wall is
/// rejected rather than clamped.
pub fn carve_doors(
    walls_by_room: &[Vec<WallSegment>],
    openings: &[DoorOpening],
    config: &GenerationConfig,
) -> Result<Vec<Vec<WallSegment>>, GeometryError> {
    let openings_by_wall: HashMap<(RoomId, Side), &DoorOpening> =
        openings.iter().map(|opening| ((opening.room_id, opening.side), opening)).collect();

    walls_by_room
        .iter()
        .map(|segments| {
            let mut carved = Vec::with_capacity(segments.len() + 1);
            for segment in segments {
                match openings_by_wall.get(&(segment.room_id, segment.side)) {
                    None => carved.push(*segment),
                    Some(opening) => {
                        carved.extend(split_around_opening(segment, opening, config.epsilon)?);
                    }
                }
            }
            Ok(carved)
        })
        .collect()
}

fn split_around_opening(
    segment: &WallSegment,
    opening: &DoorOpening,
    epsilon: f64,
) -> Result<Vec<WallSegment>, GeometryError> {
    let segment_length = segment.length();
    if opening.width > segment_length + epsilon {
        return Err(GeometryError::OpeningTooWide {
            room: segment.room_id,
            side: segment.side,
            opening_width: opening.width,
            segment_length,
        });
    }

    let half_width = opening.width / 2.0;
    let mut pieces = Vec::with_capacity(2);
    match segment.side.runs_along() {
        Axis::X => {
            let (low, high) = ordered(segment.x1, segment.x2);
            let gap_start = opening.center.0 - half_width;
            let gap_end = opening.center.0 + half_width;
            if gap_start - low > epsilon {
                pieces.push(WallSegment { x1: low, x2: gap_start, ..*segment });
            }
            if high - gap_end > epsilon {
                pieces.push(WallSegment { x1: gap_end, x2: high, ..*segment });
            }
        }
        Axis::Y => {
            let (low, high) = ordered(segment.y1, segment.y2);
            let gap_start = opening.center.1 - half_width;
            let gap_end = opening.center.1 + half_width;
            if gap_start - low > epsilon {
                pieces.push(WallSegment { y1: low, y2: gap_start, ..*segment });
            }
            if high - gap_end > epsilon {
                pieces.push(WallSegment { y1: gap_end, y2: high, ..*segment });
            }
        }
    }
    Ok(pieces)
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
