//! Hash-randomization control
//!
//! Two halves:
//!
//! - [`HashSeedEnv`]: the environment assignment that pins hash
//!   randomization in interpreters started after it is set. Changing it
//!   does nothing to hashing inside the current process, which fixed its
//!   hash keys at startup. It matters for children that inherit the
//!   environment, or after a re-exec.
//! - [`SeededHashState`]: a `BuildHasher` with seed-derived keys, giving
//!   Rust maps in this process a reproducible iteration order.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hasher};
use std::process::Command;

use crate::core::{Seed, SeedError};

/// Variable read by CPython to fix its hash seed.
pub const DEFAULT_HASH_SEED_VAR: &str = "PYTHONHASHSEED";

/// Environment assignment `var=seed`
///
/// # Example
/// ```
/// use reproducible_seed_core::{HashSeedEnv, Seed};
///
/// let env = HashSeedEnv::new("PYTHONHASHSEED", Seed::new(42)).unwrap();
/// assert_eq!(env.value(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashSeedEnv {
    var: String,
    value: String,
}

impl HashSeedEnv {
    /// Pair a variable name with the seed's decimal form
    ///
    /// # Arguments
    /// * `var` - Environment variable name
    /// * `seed` - Seed whose decimal string becomes the value
    ///
    /// # Errors
    /// `InvalidConfig` if `var` is empty or contains `=` or NUL.
    pub fn new(var: impl Into<String>, seed: Seed) -> Result<Self, SeedError> {
        let var = var.into();
        validate_var_name(&var)?;
        Ok(Self {
            var,
            value: seed.env_value(),
        })
    }

    /// Assignment for the default `PYTHONHASHSEED` variable
    pub fn python(seed: Seed) -> Self {
        Self {
            var: DEFAULT_HASH_SEED_VAR.to_string(),
            value: seed.env_value(),
        }
    }

    /// Variable name
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Decimal seed string assigned to the variable
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the variable in this process's environment
    ///
    /// Only subsequently spawned processes observe a different hash seed.
    pub fn export(&self) {
        std::env::set_var(&self.var, &self.value);
    }

    /// Set the variable on a single child command, leaving this
    /// process's environment untouched
    pub fn apply_to<'a>(&self, command: &'a mut Command) -> &'a mut Command {
        command.env(&self.var, &self.value)
    }

    /// Whether the current process environment already carries this value
    pub fn is_exported(&self) -> bool {
        std::env::var(&self.var).map_or(false, |v| v == self.value)
    }
}

/// Reject names that `std::env::set_var` would panic on
pub fn validate_var_name(var: &str) -> Result<(), SeedError> {
    if var.is_empty() {
        return Err(SeedError::InvalidConfig(
            "hash seed variable name must not be empty".to_string(),
        ));
    }
    if var.contains('=') || var.contains('\0') {
        return Err(SeedError::InvalidConfig(format!(
            "hash seed variable name {:?} must not contain '=' or NUL",
            var
        )));
    }
    Ok(())
}

/// `BuildHasher` whose keys come from the seed
///
/// Iteration order is reproducible for a given seed and toolchain; the
/// std hashing algorithm itself is not guaranteed stable across Rust
/// releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededHashState {
    key: u64,
}

impl SeededHashState {
    /// Hasher builder keyed by `seed`
    ///
    /// # Example
    /// ```
    /// use reproducible_seed_core::{Seed, SeededHashState};
    /// use std::hash::BuildHasher;
    ///
    /// let a = SeededHashState::new(Seed::new(42));
    /// let b = SeededHashState::new(Seed::new(42));
    /// assert_eq!(a.hash_one("feature"), b.hash_one("feature"));
    /// ```
    pub fn new(seed: Seed) -> Self {
        Self { key: seed.value() }
    }

    /// Empty `HashMap` using this hasher
    pub fn new_map<K, V>(&self) -> HashMap<K, V, Self> {
        HashMap::with_hasher(*self)
    }

    /// Empty `HashSet` using this hasher
    pub fn new_set<T>(&self) -> HashSet<T, Self> {
        HashSet::with_hasher(*self)
    }
}

impl Default for SeededHashState {
    fn default() -> Self {
        Self::new(Seed::default())
    }
}

impl BuildHasher for SeededHashState {
    type Hasher = DefaultHasher;

    fn build_hasher(&self) -> DefaultHasher {
        // DefaultHasher::new() uses fixed keys; the prefix mixes in the seed
        let mut hasher = DefaultHasher::new();
        hasher.write_u64(self.key);
        hasher
    }
}
