//! # Foundation Checks
//!
//! The four deterministic foundation checks. Each check follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Check results (JSON-serializable)
//! - `calculate(input) -> GeoResult<*Result>` - Pure calculation function
//!
//! The underlying closed-form formulas are exposed as free functions so
//! the Monte Carlo trial evaluator can call them directly with sampled
//! parameters, without rebuilding input structs per trial.
//!
//! ## Available Checks
//!
//! - [`bearing`] - Terzaghi-type ultimate/allowable bearing capacity
//! - [`sliding`] - Base friction factor of safety
//! - [`overturning`] - Restoring vs. overturning moment
//! - [`settlement`] - Elastic settlement

pub mod bearing;
pub mod overturning;
pub mod settlement;
pub mod sliding;

// Re-export commonly used types
pub use bearing::{BearingInput, BearingResult};
pub use overturning::{OverturningInput, OverturningResult};
pub use settlement::{SettlementInput, SettlementResult};
pub use sliding::{SlidingInput, SlidingResult};

/// Sentinel factor of safety reported when there is no demand to resist
/// (zero horizontal load or zero overturning moment). Means "effectively
/// infinite safety" while keeping results finite and serializable.
pub const INFINITE_FS: f64 = 999.0;
