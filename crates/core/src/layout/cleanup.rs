//! Post-carving filters that keep the wall list free of degenerate and repeated segments.

use std::collections::HashSet;

use crate::config::GenerationConfig;
use crate::geometry::Side;
use crate::model::{RoomId, WallSegment};

pub fn remove_zero_length_segments(
    segments: impl IntoIterator<Item = WallSegment>,
    config: &GenerationConfig,
) -> Vec<WallSegment> {
    segments
        .into_iter()
        .filter(|s| {
            (s.x1 - s.x2).abs() > config.epsilon || (s.y1 - s.y2).abs() > config.epsilon
        })
        .collect()
}

/// Keeps the first segment for each (room, side, rounded endpoints) key.
pub fn dedupe_segments(
    segments: impl IntoIterator<Item = WallSegment>,
    config: &GenerationConfig,
) -> Vec<WallSegment> {
    let scale = config.dedupe_scale();
    let mut seen: HashSet<(RoomId, Side, [i64; 4])> = HashSet::new();
    segments
        .into_iter()
        .filter(|s| {
            let endpoints = [s.x1, s.y1, s.x2, s.y2].map(|v| (v * scale).round_ties_even() as i64);
            seen.insert((s.room_id, s.side, endpoints))
        })
        .collect()
}

/// Zero-length removal followed by deduplication.
pub fn cleanup_segments(
    segments: impl IntoIterator<Item = WallSegment>,
    config: &GenerationConfig,
) -> Vec<WallSegment> {
    dedupe_segments(remove_zero_length_segments(segments, config), config)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::MAX_DEDUPE_PRECISION;

    fn seg(room: u32, side: Side, x1: f64, y1: f64, x2: f64, y2: f64) -> WallSegment {
        WallSegment { room_id: RoomId(room), side, x1, y1, x2, y2, height: 3.0, thickness: 0.2 }
    }

    #[test]
    fn drops_segments_shorter_than_tolerance_on_both_axes() {
        let config = GenerationConfig::default();
        let kept = remove_zero_length_segments(
            [
                seg(0, Side::South, 0.0, 0.0, 0.0, 0.0),
                seg(0, Side::South, 1.0, 1.0, 1.00005, 1.00005),
                seg(0, Side::North, 0.0, 0.0, 0.001, 0.0),
            ],
            &config,
        );
        assert_eq!(kept, vec![seg(0, Side::North, 0.0, 0.0, 0.001, 0.0)]);
    }

    #[test]
    fn dedupe_keeps_first_seen_order_and_ignores_tiny_noise() {
        let config = GenerationConfig::default();
        let a = seg(0, Side::East, 4.0, 0.0, 4.0, 2.0);
        let noisy_a = seg(0, Side::East, 4.000_000_1, 0.0, 4.0, 2.0);
        let b = seg(1, Side::West, 4.0, 0.0, 4.0, 2.0);
        let c = seg(0, Side::West, 4.0, 0.0, 4.0, 2.0);

        let kept = dedupe_segments([a, b, noisy_a, c, a], &config);
        assert_eq!(kept, vec![a, b, c], "same geometry on another room or side is distinct");
    }

    #[test]
    fn distinct_walls_stay_distinct_at_the_finest_precision() {
        let config = GenerationConfig {
            dedupe_precision: MAX_DEDUPE_PRECISION,
            ..GenerationConfig::default()
        };
        let near = seg(0, Side::South, 10.0, 0.0, 20.0, 0.0);
        let far = seg(0, Side::South, 30.0, 0.0, 45.0, 0.0);
        let wide = seg(0, Side::South, 200.0, 0.0, 250.0, 0.0);
        assert_eq!(dedupe_segments([near, far, wide, near], &config), vec![near, far, wide]);
    }

    #[test]
    fn cleanup_applies_both_filters() {
        let config = GenerationConfig::default();
        let a = seg(2, Side::North, 0.0, 5.0, 3.0, 5.0);
        let point = seg(2, Side::North, 3.0, 5.0, 3.0, 5.0);
        assert_eq!(cleanup_segments([point, a, a, point], &config), vec![a]);
    }

    proptest! {
        #[test]
        fn cleanup_is_idempotent(
            raw in prop::collection::vec(
                (0_u32..3, 0_usize..4, 0_i32..6, 0_i32..6, 0_i32..6, 0_i32..6),
                0..40,
            )
        ) {
            let config = GenerationConfig::default();
            let segments: Vec<WallSegment> = raw
                .into_iter()
                .map(|(room, side, x1, y1, x2, y2)| {
                    seg(room, Side::ALL[side], f64::from(x1) * 0.5, f64::from(y1) * 0.5,
                        f64::from(x2) * 0.5, f64::from(y2) * 0.5)
                })
                .collect();

            let once = cleanup_segments(segments, &config);
            let twice = cleanup_segments(once.clone(), &config);
            prop_assert_eq!(&once, &twice);
            for s in &once {
                prop_assert!((s.x1 - s.x2).abs() > config.epsilon || (s.y1 - s.y2).abs() > config.epsilon);
            }
        }
    }
}
