//! Config fingerprinting
//!
//! Identical configs hash identically regardless of key order, so the
//! fingerprint can label an experiment run.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::core::SeedError;

/// Compute a SHA-256 hex digest over the canonical JSON form of `config`
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, SeedError> {
    let value = serde_json::to_value(config).map_err(|e| {
        SeedError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    // Recursively sort object keys
    fn canonicalize(value: serde_json::Value) -> serde_json::Value {
        match value {
            serde_json::Value::Object(map) => {
                let mut sorted: Vec<_> = map.into_iter().collect();
                sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
                serde_json::Value::Object(
                    sorted
                        .into_iter()
                        .map(|(k, v)| (k, canonicalize(v)))
                        .collect(),
                )
            }
            serde_json::Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(canonicalize).collect())
            }
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        SeedError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
