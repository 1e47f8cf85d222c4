//! Seed configuration
//!
//! Resolution order, lowest precedence first:
//!
//! 1. Built-in defaults (seed 42, `PYTHONHASHSEED`, export on)
//! 2. A JSON document (file or string)
//! 3. The `REPRO_SEED` environment variable
//!
//! # Example
//! ```
//! use reproducible_seed_core::SeedConfig;
//!
//! let config = SeedConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.hash_seed_var, "PYTHONHASHSEED");
//! assert!(config.export_env);
//! ```

mod fingerprint;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Seed, SeedError, DEFAULT_SEED};
use crate::hashing::{validate_var_name, DEFAULT_HASH_SEED_VAR};

pub use fingerprint::compute_config_hash;

/// Environment variable that overrides the configured seed.
pub const SEED_OVERRIDE_VAR: &str = "REPRO_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Seed applied to every generator
    pub seed: u64,

    /// Variable controlling hash randomization in child interpreters
    pub hash_seed_var: String,

    /// Whether initialization mutates this process's environment
    pub export_env: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            hash_seed_var: DEFAULT_HASH_SEED_VAR.to_string(),
            export_env: true,
        }
    }
}

impl SeedConfig {
    /// Defaults with a different seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Configured seed as a [`Seed`]
    pub fn seed(&self) -> Seed {
        Seed::new(self.seed)
    }

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SeedError::InvalidConfig(format!("malformed config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    ///
    /// # Errors
    /// `Io` if the file cannot be read, `InvalidConfig` if it does not
    /// parse or validate.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SeedError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    /// Apply a `REPRO_SEED`-style override value, if present
    pub fn with_override(mut self, value: Option<&str>) -> Result<Self, SeedError> {
        if let Some(raw) = value {
            let seed: Seed = raw.parse().map_err(|_| SeedError::Parse {
                var: SEED_OVERRIDE_VAR.to_string(),
                value: raw.to_string(),
            })?;
            self.seed = seed.value();
        }
        Ok(self)
    }

    /// Apply the `REPRO_SEED` override from this process's environment
    pub fn with_env_override(self) -> Result<Self, SeedError> {
        let value = std::env::var(SEED_OVERRIDE_VAR).ok();
        self.with_override(value.as_deref())
    }

    /// Check the hash-seed variable name is usable
    pub fn validate(&self) -> Result<(), SeedError> {
        validate_var_name(&self.hash_seed_var)
    }

    /// SHA-256 of the canonical JSON form, hex-encoded
    pub fn fingerprint(&self) -> Result<String, SeedError> {
        compute_config_hash(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeedConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.hash_seed_var, "PYTHONHASHSEED");
        assert!(config.export_env);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_override_replaces_seed() {
        let config = SeedConfig::default().with_override(Some("1234")).unwrap();
        assert_eq!(config.seed, 1234);
    }

    #[test]
    fn test_override_absent_keeps_seed() {
        let config = SeedConfig::with_seed(9).with_override(None).unwrap();
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_override_reports_variable() {
        let err = SeedConfig::default()
            .with_override(Some("forty-two"))
            .unwrap_err();
        assert_eq!(
            err,
            SeedError::Parse {
                var: "REPRO_SEED".to_string(),
                value: "forty-two".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = SeedConfig::from_json_str(r#"{ "sead": 1 }"#).unwrap_err();
        assert!(matches!(err, SeedError::InvalidConfig(_)));
    }
}
