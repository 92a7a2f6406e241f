//! # geo_core - Geotechnical Foundation Design Engine
//!
//! `geo_core` is the computational heart of Groundwork, providing spread
//! footing design checks and Monte Carlo reliability analysis with a
//! clean, JSON-friendly API.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results;
//!   nothing persists between calls
//! - **JSON-First**: All input and result types implement
//!   Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings - the
//!   formulas fail fast instead of leaking NaN/Infinity into results
//! - **Reproducible**: Every random draw flows from a caller-supplied
//!   seed through documented sub-streams
//!
//! ## Quick Start
//!
//! ```rust
//! use geo_core::checks::bearing::{calculate, BearingInput};
//! use geo_core::geometry::Footing;
//! use geo_core::soil::SoilProfile;
//!
//! let input = BearingInput {
//!     soil: SoilProfile {
//!         cohesion_kpa: 20.0,
//!         friction_angle_deg: 30.0,
//!         unit_weight_kn_m3: 18.0,
//!     },
//!     footing: Footing { width_m: 2.0, length_m: 2.0, depth_m: 1.0 },
//!     required_fs: 3.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("q_allow = {:.1} kPa", result.q_allow_kpa);
//! ```
//!
//! ## Modules
//!
//! - [`checks`] - The four deterministic foundation checks (bearing,
//!   sliding, overturning, settlement)
//! - [`reliability`] - Monte Carlo reliability engine over candidate widths
//! - [`soil`], [`loads`], [`geometry`], [`criteria`] - Validated input model
//! - [`parse`] - Width-list text parsing
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod checks;
pub mod criteria;
pub mod errors;
pub mod geometry;
pub mod loads;
pub mod parse;
pub mod reliability;
pub mod soil;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use criteria::SafetyCriteria;
pub use errors::{GeoError, GeoResult};
pub use geometry::Footing;
pub use loads::LoadCase;
pub use parse::{parse_width_list, ParsedWidths};
pub use reliability::{
    run_study, run_study_parallel, run_study_with_progress, ReliabilityResult, StudyControl,
    StudyInput, UncertaintySpec,
};
pub use soil::{SoilProfile, StiffnessProfile};
