//! # Monte Carlo Reliability Analysis
//!
//! Estimates, per candidate footing width, the probability that all four
//! foundation checks pass simultaneously under parameter uncertainty.
//! This is a plain pass/fail Monte Carlo estimator of a joint failure
//! probability; no variance reduction and no confidence intervals.
//!
//! Pipeline per candidate width:
//!
//! 1. [`sampler`] draws a perturbed (unit weight, modulus, load) triple
//!    from a seeded sub-stream
//! 2. the trial evaluator applies the four checks to the draw
//! 3. [`study`] counts passing trials into a reliability percentage
//!
//! The engine is stateless between runs: callers keep the returned
//! [`ReliabilityResult`] values if they want history.

pub mod sampler;
pub mod study;

mod trial;

// Re-export commonly used types
pub use sampler::{sample_params, substream_seed, SampledParams, UncertaintySpec};
pub use study::{
    run_study, run_study_parallel, run_study_with_progress, ReliabilityResult, StudyControl,
    StudyInput,
};
