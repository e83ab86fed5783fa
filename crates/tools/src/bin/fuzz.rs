use anyhow::{Context, Result};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use std::collections::HashSet;
use storey_core::{Building, BuildingSpec, GenerationConfig, RoofType, Side, generate_building};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    runs: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

/// Grid-aligned dimension between the minimum room size and roughly 50 m.
fn dimension(rng: &mut ChaCha8Rng, config: &GenerationConfig) -> f64 {
    let min_cells = (config.min_room_size / config.grid).ceil() as u64;
    let cells = min_cells + rng.next_u64() % 200;
    cells as f64 * config.grid
}

fn random_spec(rng: &mut ChaCha8Rng, config: &GenerationConfig) -> BuildingSpec {
    BuildingSpec {
        width: dimension(rng, config),
        depth: dimension(rng, config),
        floors: 1 + (rng.next_u64() % 5) as u32,
        seed: rng.next_u64(),
        roof_type: choose(rng, &[RoofType::Flat, RoofType::Gabled, RoofType::Shed, RoofType::Hip]),
    }
}

fn check_invariants(building: &Building, config: &GenerationConfig) {
    let eps = config.epsilon;
    let spec = &building.spec;
    assert_eq!(building.floors.len(), spec.floors as usize, "Invariant failed: floor count");

    for floor in &building.floors {
        let label = format!("seed {} floor {}", spec.seed, floor.floor_index);

        for (i, room) in floor.rooms.iter().enumerate() {
            assert_eq!(room.id.index(), i, "Invariant failed: sparse room ids ({label})");
            assert!(
                room.rect.width() >= config.min_room_size - eps
                    && room.rect.height() >= config.min_room_size - eps,
                "Invariant failed: undersized room {room:?} ({label})"
            );
            assert!(
                !room.rect.intersects(&floor.corridor.rect, eps),
                "Invariant failed: room overlaps corridor ({label})"
            );
            for other in &floor.rooms[i + 1..] {
                assert!(
                    !room.rect.intersects(&other.rect, eps),
                    "Invariant failed: rooms {} and {} overlap ({label})",
                    room.id,
                    other.id
                );
            }
        }

        for (room_id, sides) in floor.adjacency.iter() {
            for side in Side::ALL {
                if let Some(other) = sides[side.index()] {
                    assert_eq!(
                        floor.adjacency.neighbor(other, side.opposite()),
                        Some(room_id),
                        "Invariant failed: asymmetric adjacency ({label})"
                    );
                }
            }
        }

        let mut walls = HashSet::new();
        for wall in &floor.walls {
            assert!(wall.length() > eps, "Invariant failed: degenerate wall {wall:?} ({label})");
            let key = (wall.room_id, wall.side, [wall.x1, wall.y1, wall.x2, wall.y2].map(f64::to_bits));
            assert!(walls.insert(key), "Invariant failed: duplicate wall {wall:?} ({label})");
        }

        let mut doored = HashSet::new();
        for door in &floor.doors {
            assert!(doored.insert(door.room_id), "Invariant failed: second door in a room ({label})");
            let room = &floor.rooms[door.room_id.index()];
            assert!(
                room.rect.touches(&floor.corridor.rect, door.side, eps),
                "Invariant failed: door off the corridor ({label})"
            );
        }
    }

    let has_rooms = building.room_count() > 0;
    assert_eq!(building.roof.is_some(), has_rooms, "Invariant failed: roof presence");
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} buildings...", args.seed, args.runs);
    let config = GenerationConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut total_rooms = 0;
    for run in 0..args.runs {
        let spec = random_spec(&mut rng, &config);
        let building = generate_building(&spec, &config)
            .with_context(|| format!("Run {run} failed to generate {spec:?}"))?;
        check_invariants(&building, &config);

        let replay = generate_building(&spec, &config)
            .with_context(|| format!("Run {run} failed on regeneration"))?;
        assert_eq!(
            building.fingerprint(),
            replay.fingerprint(),
            "Invariant failed: non-deterministic generation for {spec:?}"
        );
        total_rooms += building.room_count();
    }

    println!("Fuzzing completed successfully ({total_rooms} rooms checked).");
    Ok(())
}
