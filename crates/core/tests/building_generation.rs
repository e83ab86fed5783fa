use std::collections::HashSet;

use proptest::prelude::*;
use storey_core::layout::{build_adjacency, build_roof, generate_floorplan};
use storey_core::{
    BuildError, BuildingSpec, ConfigError, GenerationConfig, Rect, RoofType, Room, RoomId, Side,
    generate_building, snap,
};

fn spec(width: f64, depth: f64, floors: u32, seed: u64, roof_type: RoofType) -> BuildingSpec {
    BuildingSpec { width, depth, floors, seed, roof_type }
}

#[test]
fn scenario_same_seed_same_floorplan() {
    let config = GenerationConfig::default();
    let first = generate_floorplan(20.0, 16.0, 42, 0, &config);
    let second = generate_floorplan(20.0, 16.0, 42, 0, &config);
    assert_eq!(first, second, "identical inputs must yield identical floorplans");
    assert!(!first.rooms.is_empty());
}

#[test]
fn scenario_two_rooms_share_an_east_west_wall() {
    let config = GenerationConfig::default();
    let rooms = [
        Room { rect: Rect::new(0.0, 0.0, 5.0, 5.0), floor_index: 0, id: RoomId(0) },
        Room { rect: Rect::new(5.0, 0.0, 10.0, 5.0), floor_index: 0, id: RoomId(1) },
    ];

    let adjacency = build_adjacency(&rooms, &config);
    let (a, b) = (rooms[0].id, rooms[1].id);
    for side in Side::ALL {
        let expected_a = (side == Side::East).then_some(b);
        let expected_b = (side == Side::West).then_some(a);
        assert_eq!(adjacency.neighbor(a, side), expected_a, "A {side:?}");
        assert_eq!(adjacency.neighbor(b, side), expected_b, "B {side:?}");
    }
}

#[test]
fn scenario_flat_roof_stays_at_base_height() {
    let roof = build_roof(
        &Rect::new(0.0, 0.0, 10.0, 10.0),
        3.0,
        RoofType::Flat,
        &GenerationConfig::default(),
    );
    assert_eq!(roof.faces.len(), 2);
    assert!(roof.faces.iter().flat_map(|face| face.vertices()).all(|v| v.z == 3.0));
}

#[test]
fn scenario_tiny_footprint_is_a_configuration_error() {
    let result = generate_building(&spec(2.0, 2.0, 3, 42, RoofType::Hip), &GenerationConfig::default());
    match result {
        Err(BuildError::Configuration(ConfigError::FootprintTooSmall { width, depth, .. })) => {
            assert_eq!((width, depth), (2.0, 2.0));
        }
        other => panic!("expected a footprint error, got {other:?}"),
    }
}

#[test]
fn snapping_rounds_to_the_nearest_grid_line() {
    assert_eq!(snap(0.24, 0.25), 0.25);
    assert_eq!(snap(0.12, 0.25), 0.0);
    assert_eq!(snap(0.51, 0.25), 0.5);
}

#[test]
fn every_roof_type_produces_a_roof_over_the_top_floor() {
    let config = GenerationConfig::default();
    for roof_type in [RoofType::Flat, RoofType::Gabled, RoofType::Shed, RoofType::Hip] {
        let building = generate_building(&spec(18.0, 14.0, 2, 9, roof_type), &config)
            .expect("valid spec");
        let roof = building.roof.expect("roof");
        assert_eq!(roof.roof_type, roof_type);
        let base_z = 2.0 * config.story_height;
        let peak = roof
            .faces
            .iter()
            .flat_map(|face| face.vertices())
            .map(|v| v.z)
            .fold(f64::MIN, f64::max);
        let expected = if roof_type == RoofType::Flat { base_z } else { base_z + config.roof_height };
        assert!((peak - expected).abs() < 1e-9, "{roof_type}: peak {peak}");
    }
}

#[test]
fn fingerprint_is_stable_and_seed_sensitive() {
    let config = GenerationConfig::default();
    let a = generate_building(&spec(24.0, 20.0, 2, 1, RoofType::Hip), &config).expect("ok");
    let b = generate_building(&spec(24.0, 20.0, 2, 1, RoofType::Hip), &config).expect("ok");
    assert_eq!(a.fingerprint(), b.fingerprint());

    let distinct: HashSet<u64> = (0..8)
        .map(|seed| {
            generate_building(&spec(24.0, 20.0, 2, seed, RoofType::Hip), &config)
                .expect("ok")
                .fingerprint()
        })
        .collect();
    assert!(distinct.len() > 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_buildings_hold_layout_invariants(
        width_cells in 12_u32..160,
        depth_cells in 12_u32..160,
        floors in 1_u32..4,
        seed in any::<u64>(),
    ) {
        let config = GenerationConfig::default();
        let width = f64::from(width_cells) * 0.25;
        let depth = f64::from(depth_cells) * 0.25;
        let building = generate_building(&spec(width, depth, floors, seed, RoofType::Gabled), &config)
            .expect("footprint above the minimum");
        prop_assert_eq!(building.floors.len(), floors as usize);

        let eps = config.epsilon;
        for floor in &building.floors {
            for (i, room) in floor.rooms.iter().enumerate() {
                prop_assert_eq!(room.id.index(), i);
                prop_assert!(room.rect.width() >= config.min_room_size - eps);
                prop_assert!(room.rect.height() >= config.min_room_size - eps);
                prop_assert!(!room.rect.intersects(&floor.corridor.rect, eps));
                for other in &floor.rooms[i + 1..] {
                    prop_assert!(!room.rect.intersects(&other.rect, eps));
                }
            }

            for (room_id, sides) in floor.adjacency.iter() {
                for side in Side::ALL {
                    if let Some(other) = sides[side.index()] {
                        prop_assert_eq!(floor.adjacency.neighbor(other, side.opposite()), Some(room_id));
                    }
                }
            }

            let mut seen = HashSet::new();
            for wall in &floor.walls {
                prop_assert!(wall.length() > eps);
                let key = (wall.room_id, wall.side, [wall.x1, wall.y1, wall.x2, wall.y2].map(f64::to_bits));
                prop_assert!(seen.insert(key));
            }

            let mut doored = HashSet::new();
            for door in &floor.doors {
                prop_assert!(doored.insert(door.room_id));
                let room = floor.rooms[door.room_id.index()];
                prop_assert!(room.rect.touches(&floor.corridor.rect, door.side, eps));
            }
        }
    }
}
