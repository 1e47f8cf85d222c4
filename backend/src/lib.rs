//! Reproducible Seed Core
//!
//! Pins every source of nondeterminism in an experiment process to one
//! fixed seed.
//!
//! # Architecture
//!
//! - **core**: The seed value and error type
//! - **config**: Seed configuration, overrides and fingerprinting
//! - **rng**: Deterministic generators (general-purpose and numeric)
//! - **hashing**: Hash-seed environment and seeded `BuildHasher`
//! - **init**: The initializer, the explicit context and the globals
//!
//! # Critical Invariants
//!
//! 1. One seed feeds all three seeding effects
//! 2. Same seed + same call sequence → same values, across processes
//! 3. The hash-seed variable only affects processes started after it is set
//!
//! # Example
//! ```
//! use reproducible_seed_core::{initialize, global, SeedConfig};
//!
//! let mut ctx = initialize(&SeedConfig::with_seed(42)).unwrap();
//! assert_eq!(std::env::var("PYTHONHASHSEED").unwrap(), "42");
//!
//! let sample = ctx.numeric().standard_normal(3);
//! let coin = global::with_rng(|rng| rng.range(0, 2));
//! # let _ = (sample, coin);
//! ```

// Module declarations
pub mod config;
pub mod core;
pub mod hashing;
pub mod init;
pub mod rng;

// Re-exports for convenience
pub use config::{compute_config_hash, SeedConfig, SEED_OVERRIDE_VAR};
pub use core::{Seed, SeedError, DEFAULT_SEED};
pub use hashing::{HashSeedEnv, SeededHashState, DEFAULT_HASH_SEED_VAR};
pub use init::{global, initialize, seed_everything, SeedContext};
pub use rng::{NumericRng, RngManager};
