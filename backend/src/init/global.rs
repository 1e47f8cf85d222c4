//! Process-wide generators
//!
//! For callers that cannot thread a [`SeedContext`](super::SeedContext)
//! through. Both generators start from `DEFAULT_SEED` until reseeded.
//! Concurrent callers are memory-safe but the interleaving of their draws
//! is not deterministic.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::core::Seed;
use crate::rng::{NumericRng, RngManager};

static GENERAL: OnceLock<Mutex<RngManager>> = OnceLock::new();
static NUMERIC: OnceLock<Mutex<NumericRng>> = OnceLock::new();

fn general() -> MutexGuard<'static, RngManager> {
    GENERAL
        .get_or_init(|| Mutex::new(RngManager::default()))
        .lock()
        // state is a plain word, a panicking holder cannot corrupt it
        .unwrap_or_else(PoisonError::into_inner)
}

fn numeric() -> MutexGuard<'static, NumericRng> {
    NUMERIC
        .get_or_init(|| Mutex::new(NumericRng::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Reset the global general-purpose generator
pub fn reseed_rng(seed: Seed) {
    general().reseed(seed);
}

/// Reset the global numeric generator
pub fn reseed_numeric(seed: Seed) {
    numeric().reseed(seed);
}

/// Reset both global generators
pub fn reseed(seed: Seed) {
    reseed_rng(seed);
    reseed_numeric(seed);
}

/// Run `f` with exclusive access to the global general-purpose generator
///
/// # Example
/// ```
/// use reproducible_seed_core::{global, Seed};
///
/// global::reseed(Seed::new(42));
/// let first = global::with_rng(|rng| rng.next());
/// global::reseed(Seed::new(42));
/// assert_eq!(global::with_rng(|rng| rng.next()), first);
/// ```
pub fn with_rng<R>(f: impl FnOnce(&mut RngManager) -> R) -> R {
    f(&mut general())
}

/// Run `f` with exclusive access to the global numeric generator
pub fn with_numeric<R>(f: impl FnOnce(&mut NumericRng) -> R) -> R {
    f(&mut numeric())
}
