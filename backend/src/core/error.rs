//! Error type for seeding operations

use thiserror::Error;

/// Errors that can occur while configuring or using the seeded generators.
///
/// Seeding itself never fails; these cover configuration and sampling
/// parameters only.
#[derive(Debug, Error, PartialEq)]
pub enum SeedError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Could not parse {var}={value:?} as an unsigned 64-bit seed")]
    Parse { var: String, value: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
