// microcut-core/tests/test_segment_merger.rs

use microcut_core::types::total_duration;
use microcut_core::{CoreError, DurationMerger, Interval, RemainderPolicy, merge_intervals};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CASES: usize = 300;

fn scenes(bounds: &[(f64, f64)]) -> Vec<Interval> {
    bounds.iter().copied().map(Interval::from).collect()
}

/// Contiguous scenes with whole-second durations, so sums stay exact.
fn random_scenes(rng: &mut StdRng) -> Vec<Interval> {
    let count = rng.gen_range(1..=40);
    let mut start = rng.gen_range(0..=30) as f64;
    (0..count)
        .map(|_| {
            let end = start + rng.gen_range(1..=120) as f64;
            let scene = Interval::new(start, end);
            start = end;
            scene
        })
        .collect()
}

fn random_bounds(rng: &mut StdRng) -> (f64, f64) {
    let min = rng.gen_range(5..=60) as f64;
    let max = min + rng.gen_range(1..=90) as f64;
    (min, max)
}

#[test]
fn test_group_keeps_absorbing_below_max() {
    let merged = merge_intervals(&scenes(&[(0.0, 20.0), (20.0, 50.0), (50.0, 60.0)]), 45.0, 90.0)
        .unwrap();
    assert_eq!(merged, scenes(&[(0.0, 60.0)]));
}

#[test]
fn test_lone_short_scene_is_not_dropped() {
    let merged = merge_intervals(&scenes(&[(0.0, 10.0)]), 45.0, 90.0).unwrap();
    assert_eq!(merged, scenes(&[(0.0, 10.0)]));
}

#[test]
fn test_backward_merge_can_exceed_max() {
    // 85 closes at 85 + 30 > 90, then the 30s tail is folded back.
    let merged = merge_intervals(&scenes(&[(0.0, 85.0), (85.0, 115.0)]), 45.0, 90.0).unwrap();
    assert_eq!(merged, scenes(&[(0.0, 115.0)]));
    assert!(merged[0].duration() > 90.0);
}

#[test]
fn test_keep_short_remainder_flags_tail() {
    let merger = DurationMerger::new(45.0, 90.0).with_remainder_policy(RemainderPolicy::KeepShort);
    let merged = merger
        .merge(&scenes(&[(0.0, 85.0), (85.0, 115.0)]))
        .unwrap();
    assert_eq!(merged, scenes(&[(0.0, 85.0), (85.0, 115.0)]));
}

#[test]
fn test_non_contiguous_input_is_rejected() {
    let result = merge_intervals(&scenes(&[(0.0, 10.0), (10.5, 20.0)]), 5.0, 30.0);
    assert!(matches!(result, Err(CoreError::InvalidInterval(_))));
}

#[test]
fn test_randomized_conservation_and_partition() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..CASES {
        let input = random_scenes(&mut rng);
        let (min, max) = random_bounds(&mut rng);

        let merged = merge_intervals(&input, min, max).unwrap();

        assert_eq!(total_duration(&merged), total_duration(&input));
        assert_eq!(merged.first().unwrap().start, input.first().unwrap().start);
        assert_eq!(merged.last().unwrap().end, input.last().unwrap().end);
        assert!(merged.windows(2).all(|w| w[0].end == w[1].start));
        // Every output boundary is an input boundary
        assert!(merged.iter().all(|m| input.iter().any(|i| i.end == m.end)));
    }
}

#[test]
fn test_randomized_minimum_is_met() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..CASES {
        let input = random_scenes(&mut rng);
        let (min, max) = random_bounds(&mut rng);

        let merged = merge_intervals(&input, min, max).unwrap();

        if merged.len() > 1 {
            assert!(
                merged.iter().all(|segment| segment.duration() >= min),
                "min={min} max={max} merged={merged:?}"
            );
        }
    }
}

#[test]
fn test_randomized_merge_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0xdead_beef);

    for _ in 0..CASES {
        let input = random_scenes(&mut rng);
        let (min, max) = random_bounds(&mut rng);

        let once = merge_intervals(&input, min, max).unwrap();
        let twice = merge_intervals(&once, min, max).unwrap();

        assert_eq!(once, twice, "min={min} max={max} input={input:?}");
    }
}
