//! Seed initialization
//!
//! [`initialize`] applies one seed to every source of nondeterminism, in
//! this order:
//!
//! 1. the hash-seed environment variable (children and re-execs only)
//! 2. the global general-purpose generator
//! 3. the global numeric generator
//!
//! It also returns a [`SeedContext`] owning freshly seeded instances.
//! New code should draw from the context rather than the globals.

pub mod global;

use std::ffi::OsStr;
use std::process::Command;

use tracing::{debug, info, warn};

use crate::config::{SeedConfig, SEED_OVERRIDE_VAR};
use crate::core::{Seed, SeedError};
use crate::hashing::{HashSeedEnv, SeededHashState};
use crate::rng::{NumericRng, RngManager};

/// Seeded generator instances to pass to code that needs determinism
///
/// Building a context has no side effects on the process.
///
/// # Example
/// ```
/// use reproducible_seed_core::{SeedConfig, SeedContext};
///
/// let mut a = SeedContext::new(&SeedConfig::with_seed(42)).unwrap();
/// let mut b = SeedContext::new(&SeedConfig::with_seed(42)).unwrap();
/// assert_eq!(a.rng().next(), b.rng().next());
/// assert_eq!(a.numeric().random(4), b.numeric().random(4));
/// ```
#[derive(Debug, Clone)]
pub struct SeedContext {
    seed: Seed,
    hash_env: HashSeedEnv,
    rng: RngManager,
    numeric: NumericRng,
}

impl SeedContext {
    /// Build a context from `config` without touching process state
    ///
    /// # Errors
    /// `InvalidConfig` when the hash-seed variable name is unusable.
    pub fn new(config: &SeedConfig) -> Result<Self, SeedError> {
        config.validate()?;
        let seed = config.seed();
        Ok(Self::with_env(seed, HashSeedEnv::new(&config.hash_seed_var, seed)?))
    }

    fn with_env(seed: Seed, hash_env: HashSeedEnv) -> Self {
        Self {
            seed,
            hash_env,
            rng: RngManager::from_seed(seed),
            numeric: NumericRng::from_seed(seed),
        }
    }

    /// The seed every generator in this context started from
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// The hash-seed assignment children of this context receive
    pub fn hash_env(&self) -> &HashSeedEnv {
        &self.hash_env
    }

    /// This context's general-purpose generator
    pub fn rng(&mut self) -> &mut RngManager {
        &mut self.rng
    }

    /// This context's numeric generator
    pub fn numeric(&mut self) -> &mut NumericRng {
        &mut self.numeric
    }

    /// Seed-keyed `BuildHasher` for reproducible map ordering
    pub fn hash_state(&self) -> SeededHashState {
        SeededHashState::new(self.seed)
    }

    /// Rewind both generators to the start of the seeded sequence
    pub fn reset(&mut self) {
        self.rng.reseed(self.seed);
        self.numeric.reseed(self.seed);
    }

    /// Child command carrying the hash seed and `REPRO_SEED`
    pub fn command(&self, program: impl AsRef<OsStr>) -> Command {
        let mut command = Command::new(program);
        self.hash_env.apply_to(&mut command);
        command.env(SEED_OVERRIDE_VAR, self.seed.env_value());
        command
    }
}

/// Apply `config` to the process and return a seeded context
///
/// Fails only when the config itself is invalid.
pub fn initialize(config: &SeedConfig) -> Result<SeedContext, SeedError> {
    let context = SeedContext::new(config)?;
    apply(&context, config.export_env);
    Ok(context)
}

/// Seed everything with the default hash-seed variable
pub fn seed_everything(seed: Seed) -> SeedContext {
    let context = SeedContext::with_env(seed, HashSeedEnv::python(seed));
    apply(&context, true);
    context
}

fn apply(context: &SeedContext, export_env: bool) {
    let seed = context.seed;
    info!(
        seed = seed.value(),
        hash_seed_var = context.hash_env.var(),
        "Seeding all generators"
    );

    if export_env {
        context.hash_env.export();
        debug!(
            var = context.hash_env.var(),
            value = context.hash_env.value(),
            "Exported hash seed for child processes"
        );
    } else {
        warn!(
            var = context.hash_env.var(),
            "Hash seed export disabled, child processes keep randomized hashing"
        );
    }

    global::reseed_rng(seed);
    debug!(seed = seed.value(), "Reseeded general-purpose generator");

    global::reseed_numeric(seed);
    debug!(seed = seed.value(), "Reseeded numeric generator");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_rejects_invalid_var() {
        let config = SeedConfig {
            hash_seed_var: String::new(),
            ..SeedConfig::default()
        };
        assert!(SeedContext::new(&config).is_err());
    }

    #[test]
    fn test_reset_rewinds_both_generators() {
        let mut ctx = SeedContext::new(&SeedConfig::with_seed(7)).unwrap();
        let r1 = ctx.rng().next();
        let n1 = ctx.numeric().next_f64();

        ctx.reset();
        assert_eq!(ctx.rng().next(), r1);
        assert_eq!(ctx.numeric().next_f64(), n1);
    }

    #[test]
    fn test_command_carries_seed_env() {
        let ctx = SeedContext::new(&SeedConfig::with_seed(42)).unwrap();
        let cmd = ctx.command("true");
        let envs: Vec<(String, String)> = cmd
            .get_envs()
            .filter_map(|(k, v)| {
                v.map(|v| {
                    (
                        k.to_string_lossy().into_owned(),
                        v.to_string_lossy().into_owned(),
                    )
                })
            })
            .collect();

        assert!(envs.contains(&("PYTHONHASHSEED".to_string(), "42".to_string())));
        assert!(envs.contains(&("REPRO_SEED".to_string(), "42".to_string())));
    }
}
