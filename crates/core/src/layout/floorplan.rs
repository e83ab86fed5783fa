//! Corridor-aware binary-space-partition of one floor footprint into rooms.

use serde::Serialize;

use crate::config::GenerationConfig;
use crate::geometry::{Axis, Rect, snap};
use crate::model::{Corridor, Room, RoomId};

use super::seed::FloorRng;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Floorplan {
    pub rooms: Vec<Room>,
    pub corridor: Corridor,
}

/// Partitions a `width` x `depth` footprint into rooms flanking a central corridor.
///
/// The output is a pure function of the inputs: the split stream is seeded from
/// `seed + floor_index` alone. Room ids are dense and follow worklist pop order.
pub fn generate_floorplan(
    width: f64,
    depth: f64,
    seed: u64,
    floor_index: u32,
    config: &GenerationConfig,
) -> Floorplan {
    let mut rng = FloorRng::new(seed, floor_index);

    let width = snap(width, config.grid);
    let depth = snap(depth, config.grid);
    let corridor_x = snap(width / 2.0 - config.corridor_width / 2.0, config.grid);
    let corridor = Corridor {
        rect: Rect::new(corridor_x, 0.0, corridor_x + config.corridor_width, depth),
        floor_index,
        orientation: Axis::Y,
    };

    let mut placer = RoomPlacer { corridor: corridor.rect, floor_index, config, rooms: Vec::new() };
    let mut worklist = corridor_wings(width, depth, &corridor.rect, config.epsilon);
    let double_min = 2.0 * config.min_room_size;

    while let Some(rect) = worklist.pop() {
        if rect.width() < double_min && rect.height() < double_min {
            placer.accept_if_valid(rect);
            continue;
        }

        let (axis, position) = choose_split(&rect, &mut rng, config);
        let (first, second) = split_rect(&rect, axis, position);

        if !placer.large_enough(&first) || !placer.large_enough(&second) {
            placer.accept_if_valid(rect);
            continue;
        }
        if placer.crosses_corridor(&first) || placer.crosses_corridor(&second) {
            placer.accept_if_valid(rect);
            continue;
        }

        worklist.push(first);
        worklist.push(second);
    }

    let mut rooms = placer.rooms;
    rooms.sort_by_key(|room| room.id);
    Floorplan { rooms, corridor }
}

/// Splits `rect` with a cut perpendicular to `axis` at `position`.
pub fn split_rect(rect: &Rect, axis: Axis, position: f64) -> (Rect, Rect) {
    match axis {
        Axis::X => (
            Rect::new(rect.min_x, rect.min_y, position, rect.max_y),
            Rect::new(position, rect.min_y, rect.max_x, rect.max_y),
        ),
        Axis::Y => (
            Rect::new(rect.min_x, rect.min_y, rect.max_x, position),
            Rect::new(rect.min_x, position, rect.max_x, rect.max_y),
        ),
    }
}

struct RoomPlacer<'a> {
    corridor: Rect,
    floor_index: u32,
    config: &'a GenerationConfig,
    rooms: Vec<Room>,
}

impl RoomPlacer<'_> {
    fn large_enough(&self, rect: &Rect) -> bool {
        rect.width() >= self.config.min_room_size && rect.height() >= self.config.min_room_size
    }

    fn crosses_corridor(&self, rect: &Rect) -> bool {
        rect.intersects(&self.corridor, self.config.epsilon)
    }

    fn accept_if_valid(&mut self, rect: Rect) {
        if self.crosses_corridor(&rect) || !self.large_enough(&rect) {
            return;
        }
        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(Room { rect, floor_index: self.floor_index, id });
    }
}

/// Footprint regions on either side of the corridor; empty wings are skipped.
fn corridor_wings(width: f64, depth: f64, corridor: &Rect, epsilon: f64) -> Vec<Rect> {
    let mut wings = Vec::with_capacity(2);
    if corridor.min_x > epsilon {
        wings.push(Rect::new(0.0, 0.0, corridor.min_x, depth));
    }
    if width - corridor.max_x > epsilon {
        wings.push(Rect::new(corridor.max_x, 0.0, width, depth));
    }
    wings
}

fn choose_split(rect: &Rect, rng: &mut FloorRng, config: &GenerationConfig) -> (Axis, f64) {
    let mut axis = if rng.coin_flip() { Axis::X } else { Axis::Y };
    let mut position = snapped_midpoint(rect, axis, config.grid);

    if axis == Axis::X && leaves_sliver(rect, axis, position, config.min_room_size) {
        axis = Axis::Y;
        position = snapped_midpoint(rect, axis, config.grid);
    }
    if axis == Axis::Y && leaves_sliver(rect, axis, position, config.min_room_size) {
        axis = Axis::X;
        position = snapped_midpoint(rect, axis, config.grid);
    }
    (axis, position)
}

fn snapped_midpoint(rect: &Rect, axis: Axis, grid: f64) -> f64 {
    match axis {
        Axis::X => snap(rect.min_x + rect.width() / 2.0, grid),
        Axis::Y => snap(rect.min_y + rect.height() / 2.0, grid),
    }
}

fn leaves_sliver(rect: &Rect, axis: Axis, position: f64, min_room_size: f64) -> bool {
    let (low, high) = match axis {
        Axis::X => (rect.min_x, rect.max_x),
        Axis::Y => (rect.min_y, rect.max_y),
    };
    position <= low + min_room_size || position >= high - min_room_size
}
