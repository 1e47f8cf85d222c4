//! The seed value
//!
//! One integer feeds every source of nondeterminism. It is defined once
//! and never changes for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::SeedError;

/// Seed used when nothing else is configured.
pub const DEFAULT_SEED: u64 = 42;

/// A fixed seed shared by all generators.
///
/// # Example
/// ```
/// use reproducible_seed_core::Seed;
///
/// let seed = Seed::new(42);
/// assert_eq!(seed.value(), 42);
/// assert_eq!(seed.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u64);

impl Seed {
    /// Wrap a raw integer
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw integer
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Decimal string form, as exported to the hash-seed variable
    pub fn env_value(self) -> String {
        self.0.to_string()
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self(DEFAULT_SEED)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| SeedError::Parse {
                var: "seed".to_string(),
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_is_42() {
        assert_eq!(Seed::default().value(), 42);
    }

    #[test]
    fn test_env_value_is_decimal() {
        assert_eq!(Seed::new(42).env_value(), "42");
        assert_eq!(Seed::new(0).env_value(), "0");
        assert_eq!(Seed::new(u64::MAX).env_value(), "18446744073709551615");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 7 ".parse::<Seed>().unwrap(), Seed::new(7));
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = "-1".parse::<Seed>().unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
    }
}
