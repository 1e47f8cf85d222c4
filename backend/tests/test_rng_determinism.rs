//! Tests for the general-purpose generator
//!
//! Same seed MUST produce the same sequence.

use proptest::prelude::*;
use reproducible_seed_core::{RngManager, Seed};

#[test]
fn test_rng_new_with_seed() {
    let rng = RngManager::new(12345);
    assert_eq!(rng.get_state(), 12345);
}

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = RngManager::new(42);
    let mut rng2 = RngManager::new(42);

    for _ in 0..100 {
        assert_eq!(rng1.next(), rng2.next(), "RNG not deterministic!");
    }
}

#[test]
fn test_rng_seed_42_first_value_pinned() {
    // xorshift64* applied once to state 42
    let mut x: u64 = 42;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    let expected = x.wrapping_mul(0x2545_F491_4F6C_DD1D);

    let mut rng = RngManager::from_seed(Seed::new(42));
    assert_eq!(rng.next(), expected);
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(54321);

    assert_ne!(
        rng1.next(),
        rng2.next(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_rng_range_single_value() {
    let mut rng = RngManager::new(12345);
    assert_eq!(rng.range(5, 6), 5);
}

#[test]
fn test_rng_replay_from_state() {
    let mut rng1 = RngManager::new(42);
    for _ in 0..10 {
        rng1.next();
    }

    let checkpoint_state = rng1.get_state();
    let val1_a = rng1.next();
    let val1_b = rng1.next();

    let mut rng2 = RngManager::new(checkpoint_state);
    assert_eq!(val1_a, rng2.next());
    assert_eq!(val1_b, rng2.next());
}

#[test]
fn test_rng_range_uniform_over_wide_span() {
    let min = i64::MIN;
    let max = 1i64 << 62; // span is 3 * 2^62
    let mut rng = RngManager::new(42);
    let n = 100_000;

    let first_third = (0..n)
        .filter(|_| rng.range(min, max) < min.wrapping_add(1i64 << 62))
        .count();
    let share = first_third as f64 / n as f64;
    assert!(
        (share - 1.0 / 3.0).abs() < 0.01,
        "first third share {} should be near 1/3",
        share
    );
}

#[test]
fn test_rng_shuffle_deterministic() {
    let mut a: Vec<u32> = (0..20).collect();
    let mut b = a.clone();

    RngManager::new(42).shuffle(&mut a);
    RngManager::new(42).shuffle(&mut b);

    assert_eq!(a, b);
}

#[test]
fn test_rng_choose_deterministic() {
    let models = ["ridge", "lasso", "forest", "boosting"];
    let mut rng1 = RngManager::new(42);
    let mut rng2 = RngManager::new(42);

    for _ in 0..20 {
        assert_eq!(rng1.choose(&models), rng2.choose(&models));
    }
}

#[test]
fn test_rng_produces_diverse_values() {
    let mut rng = RngManager::new(12345);
    let unique_count = (0..100)
        .map(|_| rng.next())
        .collect::<std::collections::HashSet<_>>()
        .len();
    assert!(
        unique_count > 90,
        "RNG not diverse enough: only {} unique values out of 100",
        unique_count
    );
}

proptest! {
    #[test]
    fn prop_same_seed_same_sequence(seed in any::<u64>(), len in 1usize..200) {
        let mut rng1 = RngManager::new(seed);
        let mut rng2 = RngManager::new(seed);
        for _ in 0..len {
            prop_assert_eq!(rng1.next(), rng2.next());
        }
    }

    #[test]
    fn prop_range_within_bounds(seed in any::<u64>(), min in -1_000_000i64..1_000_000, width in 1i64..1_000_000) {
        let mut rng = RngManager::new(seed);
        let v = rng.range(min, min + width);
        prop_assert!(v >= min && v < min + width);
    }
}
