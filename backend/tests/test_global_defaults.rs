//! Globals before any initialization
//!
//! Kept in its own test binary so no other test can reseed the globals
//! first.

use reproducible_seed_core::{global, NumericRng, RngManager, DEFAULT_SEED};

#[test]
fn test_unseeded_globals_start_from_default_seed() {
    let mut general = RngManager::new(DEFAULT_SEED);
    let mut numeric = NumericRng::new(DEFAULT_SEED);

    assert_eq!(DEFAULT_SEED, 42);
    assert_eq!(global::with_rng(|rng| rng.next()), general.next());
    assert_eq!(
        global::with_numeric(|n| n.next_f64()).to_bits(),
        numeric.next_f64().to_bits()
    );
}
