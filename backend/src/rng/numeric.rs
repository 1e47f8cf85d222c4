//! Numeric generator for array-style sampling
//!
//! Backed by ChaCha8 seeded through `SeedableRng::seed_from_u64`, which
//! expands the integer with its own PCG32 stream. That expansion keeps
//! this generator decorrelated from [`RngManager`](super::RngManager)
//! even though both start from the same seed.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, StandardNormal};

use crate::core::{Seed, SeedError};

/// Deterministic generator producing vectors of samples
///
/// # Example
/// ```
/// use reproducible_seed_core::{NumericRng, Seed};
///
/// let mut a = NumericRng::from_seed(Seed::new(42));
/// let mut b = NumericRng::from_seed(Seed::new(42));
/// assert_eq!(a.random(8), b.random(8));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumericRng {
    rng: ChaCha8Rng,
}

impl NumericRng {
    /// Create a generator from a raw seed
    ///
    /// Every seed is valid, zero included.
    ///
    /// # Example
    /// ```
    /// use reproducible_seed_core::NumericRng;
    ///
    /// let mut rng = NumericRng::new(0);
    /// let x = rng.next_f64();
    /// assert!((0.0..1.0).contains(&x));
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator from a [`Seed`]
    pub fn from_seed(seed: Seed) -> Self {
        Self::new(seed.value())
    }

    /// Reset to the start of the sequence for `seed`
    pub fn reseed(&mut self, seed: Seed) {
        *self = Self::from_seed(seed);
    }

    /// Next raw 64-bit output
    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Single f64 in `[0.0, 1.0)`
    pub fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Single standard normal deviate
    pub fn next_standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }

    /// `n` samples in `[0.0, 1.0)`
    pub fn random(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_f64()).collect()
    }

    /// `n` samples in `[low, high)`
    ///
    /// # Errors
    /// `InvalidParameter` unless both bounds are finite, `low < high`, and
    /// the width `high - low` is itself finite.
    pub fn uniform(&mut self, low: f64, high: f64, n: usize) -> Result<Vec<f64>, SeedError> {
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            return Err(SeedError::InvalidParameter(format!(
                "uniform requires finite low < high, got low={}, high={}",
                low, high
            )));
        }
        Ok((0..n).map(|_| self.rng.random_range(low..high)).collect())
    }

    /// `n` standard normal samples
    pub fn standard_normal(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_standard_normal()).collect()
    }

    /// `n` normal samples with the given mean and standard deviation
    ///
    /// # Errors
    /// `InvalidParameter` for a non-finite mean or a negative or
    /// non-finite standard deviation.
    pub fn normal(&mut self, mean: f64, std_dev: f64, n: usize) -> Result<Vec<f64>, SeedError> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
            return Err(SeedError::InvalidParameter(format!(
                "normal requires finite mean and std_dev >= 0, got mean={}, std_dev={}",
                mean, std_dev
            )));
        }
        let dist = Normal::new(mean, std_dev)
            .map_err(|e| SeedError::InvalidParameter(format!("normal: {}", e)))?;
        Ok((0..n).map(|_| dist.sample(&mut self.rng)).collect())
    }

    /// `n` integers drawn uniformly from `[low, high)`
    ///
    /// # Errors
    /// `InvalidParameter` if `low >= high`.
    ///
    /// # Example
    /// ```
    /// use reproducible_seed_core::NumericRng;
    ///
    /// let mut rng = NumericRng::new(42);
    /// let rolls = rng.integers(1, 7, 10).unwrap();
    /// assert!(rolls.iter().all(|r| (1..7).contains(r)));
    /// ```
    pub fn integers(&mut self, low: i64, high: i64, n: usize) -> Result<Vec<i64>, SeedError> {
        if low >= high {
            return Err(SeedError::InvalidParameter(format!(
                "integers requires low < high, got low={}, high={}",
                low, high
            )));
        }
        Ok((0..n).map(|_| self.rng.random_range(low..high)).collect())
    }

    /// Random permutation of `0..n`
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut out: Vec<usize> = (0..n).collect();
        out.shuffle(&mut self.rng);
        out
    }
}

impl Default for NumericRng {
    fn default() -> Self {
        Self::from_seed(Seed::default())
    }
}
