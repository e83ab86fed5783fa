//! Per-floor pseudo-random streams for BSP split decisions.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// One independent stream per floor, so floors reproduce regardless of generation order.
pub(super) struct FloorRng {
    rng: ChaCha8Rng,
}

impl FloorRng {
    pub(super) fn new(seed: u64, floor_index: u32) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(floor_stream_seed(seed, floor_index)) }
    }

    pub(super) fn coin_flip(&mut self) -> bool {
        self.rng.next_u64() & 1 == 0
    }
}

pub(super) fn floor_stream_seed(seed: u64, floor_index: u32) -> u64 {
    seed.wrapping_add(u64::from(floor_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(seed: u64, floor_index: u32) -> Vec<bool> {
        let mut rng = FloorRng::new(seed, floor_index);
        (0..64).map(|_| rng.coin_flip()).collect()
    }

    #[test]
    fn same_seed_and_floor_replay_the_same_stream() {
        assert_eq!(draws(42, 3), draws(42, 3));
    }

    #[test]
    fn floors_of_one_building_use_distinct_streams() {
        assert_ne!(draws(42, 0), draws(42, 1));
    }

    #[test]
    fn stream_seed_wraps_instead_of_overflowing() {
        assert_eq!(floor_stream_seed(u64::MAX, 1), 0);
        assert_eq!(floor_stream_seed(7, 2), floor_stream_seed(8, 1));
    }
}
