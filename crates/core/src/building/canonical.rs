//! Stable byte encoding and fingerprint of a generated building.
//! Floats are encoded by their exact bit patterns, so any numeric drift changes the hash.

use xxhash_rust::xxh3::xxh3_64;

use super::{Building, FloorLayout};
use crate::geometry::{Rect, Side};
use crate::layout::RoofFace;
use crate::model::{RoofType, SlabKind};

const NO_NEIGHBOR: u32 = u32::MAX;

impl Building {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        push_f64(&mut bytes, self.spec.width);
        push_f64(&mut bytes, self.spec.depth);
        bytes.extend(self.spec.floors.to_le_bytes());
        bytes.extend(self.spec.seed.to_le_bytes());
        bytes.push(roof_code(self.spec.roof_type));

        for floor in &self.floors {
            push_floor(&mut bytes, floor);
        }

        match &self.roof {
            None => bytes.push(0),
            Some(roof) => {
                bytes.push(1);
                bytes.push(roof_code(roof.roof_type));
                bytes.extend((roof.faces.len() as u32).to_le_bytes());
                for face in &roof.faces {
                    bytes.push(match face {
                        RoofFace::Triangle(_) => 3,
                        RoofFace::Quad(_) => 4,
                    });
                    for vertex in face.vertices() {
                        push_f64(&mut bytes, vertex.x);
                        push_f64(&mut bytes, vertex.y);
                        push_f64(&mut bytes, vertex.z);
                    }
                }
            }
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn push_floor(bytes: &mut Vec<u8>, floor: &FloorLayout) {
    bytes.extend(floor.floor_index.to_le_bytes());
    push_rect(bytes, &floor.corridor.rect);

    bytes.extend((floor.rooms.len() as u32).to_le_bytes());
    for room in &floor.rooms {
        bytes.extend(room.id.0.to_le_bytes());
        push_rect(bytes, &room.rect);
    }

    for (_, neighbors) in floor.adjacency.iter() {
        for neighbor in neighbors {
            bytes.extend(neighbor.map_or(NO_NEIGHBOR, |id| id.0).to_le_bytes());
        }
    }

    bytes.extend((floor.doors.len() as u32).to_le_bytes());
    for door in &floor.doors {
        bytes.extend(door.room_id.0.to_le_bytes());
        bytes.push(side_code(door.side));
        push_f64(bytes, door.center.0);
        push_f64(bytes, door.center.1);
        push_f64(bytes, door.width);
        push_f64(bytes, door.height);
    }

    bytes.extend((floor.walls.len() as u32).to_le_bytes());
    for wall in &floor.walls {
        bytes.extend(wall.room_id.0.to_le_bytes());
        bytes.push(side_code(wall.side));
        for value in [wall.x1, wall.y1, wall.x2, wall.y2, wall.height, wall.thickness] {
            push_f64(bytes, value);
        }
    }

    bytes.extend((floor.slabs.len() as u32).to_le_bytes());
    for slab in &floor.slabs {
        bytes.push(match slab.kind {
            SlabKind::Floor => 0,
            SlabKind::Ceiling => 1,
        });
        push_rect(bytes, &slab.rect);
        push_f64(bytes, slab.z);
        push_f64(bytes, slab.thickness);
    }
}

fn push_rect(bytes: &mut Vec<u8>, rect: &Rect) {
    for value in [rect.min_x, rect.min_y, rect.max_x, rect.max_y] {
        push_f64(bytes, value);
    }
}

fn push_f64(bytes: &mut Vec<u8>, value: f64) {
    bytes.extend(value.to_bits().to_le_bytes());
}

fn side_code(side: Side) -> u8 {
    side.index() as u8
}

fn roof_code(roof_type: RoofType) -> u8 {
    match roof_type {
        RoofType::Flat => 0,
        RoofType::Gabled => 1,
        RoofType::Shed => 2,
        RoofType::Hip => 3,
    }
}
