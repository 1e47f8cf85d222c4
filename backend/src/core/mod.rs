//! Core types shared by every seeding component

pub mod error;
pub mod seed;

pub use error::SeedError;
pub use seed::{Seed, DEFAULT_SEED};
