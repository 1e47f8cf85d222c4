//! Deterministic random number generation
//!
//! Two independent generators, both seeded from the same integer:
//!
//! - [`RngManager`]: general-purpose scalar draws (xorshift64*)
//! - [`NumericRng`]: array-style sampling for numeric workloads
//!
//! All randomness that should be reproducible MUST go through this module.

mod numeric;
mod xorshift;

pub use numeric::NumericRng;
pub use xorshift::RngManager;
