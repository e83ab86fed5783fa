//! Room adjacency graph and corridor-facing side detection.

use serde::Serialize;

use crate::config::GenerationConfig;
use crate::geometry::Side;
use crate::model::{Corridor, Room, RoomId};

/// Neighbor per side, indexed by [`Side::index`]. `None` means no neighbor on that side.
pub type Neighbors = [Option<RoomId>; 4];

/// Per-room neighbor arrays stored densely by room id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AdjacencyMap {
    rooms: Vec<Neighbors>,
}

impl AdjacencyMap {
    pub fn with_rooms(room_count: usize) -> Self {
        Self { rooms: vec![[None; 4]; room_count] }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn neighbors(&self, room: RoomId) -> Option<&Neighbors> {
        self.rooms.get(room.index())
    }

    pub fn neighbor(&self, room: RoomId, side: Side) -> Option<RoomId> {
        self.neighbors(room).and_then(|sides| sides[side.index()])
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Neighbors)> {
        self.rooms.iter().enumerate().map(|(index, sides)| (RoomId(index as u32), sides))
    }

    /// Records `a` and `b` as facing each other across `side` of `a`.
    ///
    /// Each side holds a single neighbor, so a later link replaces an earlier one and the
    /// displaced partner loses its back-reference. The map stays symmetric.
    fn link(&mut self, a: RoomId, side: Side, b: RoomId) {
        let back = side.opposite();
        if let Some(previous) = self.rooms[a.index()][side.index()].replace(b) {
            self.rooms[previous.index()][back.index()] = None;
        }
        if let Some(previous) = self.rooms[b.index()][back.index()].replace(a) {
            self.rooms[previous.index()][side.index()] = None;
        }
    }
}

/// Builds the symmetric adjacency map for one floor's rooms.
///
/// Room ids must be dense (`0..rooms.len()`), which the floorplan generator guarantees.
pub fn build_adjacency(rooms: &[Room], config: &GenerationConfig) -> AdjacencyMap {
    debug_assert!(rooms.iter().enumerate().all(|(index, room)| room.id.index() == index));
    let mut adjacency = AdjacencyMap::with_rooms(rooms.len());

    for (i, room_a) in rooms.iter().enumerate() {
        for room_b in &rooms[i + 1..] {
            for side in Side::ALL {
                if room_a.rect.touches(&room_b.rect, side, config.epsilon) {
                    adjacency.link(room_a.id, side, room_b.id);
                }
            }
        }
    }

    adjacency
}

/// Corridor-facing sides per room, each list in [`Side::CORRIDOR_PRIORITY`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CorridorFacing {
    rooms: Vec<Vec<Side>>,
}

impl CorridorFacing {
    pub fn sides(&self, room: RoomId) -> &[Side] {
        self.rooms.get(room.index()).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &[Side])> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, sides)| (RoomId(index as u32), sides.as_slice()))
    }
}

pub fn corridor_facing_walls(
    rooms: &[Room],
    corridor: &Corridor,
    config: &GenerationConfig,
) -> CorridorFacing {
    let rooms = rooms
        .iter()
        .map(|room| {
            Side::CORRIDOR_PRIORITY
                .into_iter()
                .filter(|&side| room.rect.touches(&corridor.rect, side, config.epsilon))
                .collect()
        })
        .collect();
    CorridorFacing { rooms }
}
