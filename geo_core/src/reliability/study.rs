//! # Reliability Aggregator
//!
//! Runs the Monte Carlo study: for each candidate width, `iterations`
//! independent trials with freshly perturbed parameters, counted into a
//! reliability percentage. Results come back in input-width order, which
//! is caller-specified and never sorted.
//!
//! Each width draws from its own deterministic sub-stream (see
//! [`substream_seed`](crate::reliability::sampler::substream_seed)), so
//! [`run_study`], [`run_study_with_progress`] and [`run_study_parallel`]
//! all produce bit-identical results for the same input.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::criteria::SafetyCriteria;
//! use geo_core::geometry::Footing;
//! use geo_core::loads::LoadCase;
//! use geo_core::reliability::{run_study, StudyInput, UncertaintySpec};
//! use geo_core::soil::{SoilProfile, StiffnessProfile};
//!
//! let input = StudyInput {
//!     soil: SoilProfile { cohesion_kpa: 20.0, friction_angle_deg: 30.0, unit_weight_kn_m3: 18.0 },
//!     loads: LoadCase { vertical_kn: 500.0, horizontal_kn: 80.0, moment_knm: 150.0 },
//!     footing: Footing { width_m: 2.0, length_m: 2.0, depth_m: 1.0 },
//!     stiffness: StiffnessProfile { modulus_kpa: 30000.0, poisson_ratio: 0.3, influence_factor: 1.0 },
//!     uncertainty: UncertaintySpec::default(),
//!     criteria: SafetyCriteria::default(),
//!     friction_coeff: 0.5,
//!     widths_m: vec![1.5, 2.0, 2.5],
//!     iterations: 300,
//!     seed: 42,
//! };
//!
//! let results = run_study(&input).unwrap();
//! assert_eq!(results.len(), 3);
//! assert!(results.iter().all(|r| (0.0..=100.0).contains(&r.reliability_percent)));
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::criteria::SafetyCriteria;
use crate::errors::{GeoError, GeoResult};
use crate::geometry::Footing;
use crate::loads::LoadCase;
use crate::reliability::sampler::{sample_params, substream_seed, UncertaintySpec};
use crate::reliability::trial::evaluate_trial;
use crate::soil::{SoilProfile, StiffnessProfile};

/// Complete configuration of one reliability study.
///
/// The footing acts as a template: its width is replaced by each entry of
/// `widths_m` in turn. The core holds no state between studies; the
/// returned results are the caller's to keep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyInput {
    /// Bearing stratum strength and weight
    pub soil: SoilProfile,

    /// Nominal applied actions
    pub loads: LoadCase,

    /// Footing template (length and depth fixed, width swept)
    pub footing: Footing,

    /// Elastic soil parameters for settlement
    pub stiffness: StiffnessProfile,

    /// Perturbation bounds for the uncertain inputs
    pub uncertainty: UncertaintySpec,

    /// Pass/fail thresholds for the four checks
    pub criteria: SafetyCriteria,

    /// Base friction coefficient μ for the sliding check
    pub friction_coeff: f64,

    /// Candidate widths B (m), evaluated in this order
    pub widths_m: Vec<f64>,

    /// Trials per candidate width
    pub iterations: u32,

    /// Master seed; each width derives its own sub-stream from it
    pub seed: u64,
}

impl StudyInput {
    /// Validate the whole study configuration before any simulation runs.
    pub fn validate(&self) -> GeoResult<()> {
        self.soil.validate()?;
        self.loads.validate()?;
        self.footing.validate()?;
        self.stiffness.validate()?;
        self.uncertainty.validate()?;
        self.criteria.validate()?;
        if self.friction_coeff < 0.0 {
            return Err(GeoError::invalid_configuration(
                "friction_coeff",
                self.friction_coeff.to_string(),
                "Friction coefficient must be non-negative",
            ));
        }
        if self.iterations == 0 {
            return Err(GeoError::invalid_configuration(
                "iterations",
                self.iterations.to_string(),
                "At least one trial per width is required",
            ));
        }
        if self.widths_m.is_empty() {
            return Err(GeoError::invalid_configuration(
                "widths_m",
                "[]",
                "At least one candidate width is required",
            ));
        }
        for &width in &self.widths_m {
            if width <= 0.0 {
                return Err(GeoError::invalid_geometry(
                    "widths_m",
                    width.to_string(),
                    "Candidate widths must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Reliability of one candidate width.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_m": 2.0,
///   "reliability_percent": 87.3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReliabilityResult {
    /// Candidate width B (m)
    pub width_m: f64,

    /// Fraction of trials in which all four checks passed, in [0, 100]
    pub reliability_percent: f64,
}

/// Caller's verdict from the per-width progress hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyControl {
    /// Keep going with the next candidate width
    Continue,
    /// Stop before the next candidate width
    Abort,
}

/// Run all trials for one candidate width on its own sub-stream.
fn run_width(input: &StudyInput, width_index: usize, width_m: f64) -> GeoResult<ReliabilityResult> {
    let footing = input.footing.with_width(width_m);
    let mut rng = StdRng::seed_from_u64(substream_seed(input.seed, width_index));

    let mut passed = 0u32;
    for _ in 0..input.iterations {
        let params = sample_params(
            &input.soil,
            &input.stiffness,
            &input.loads,
            &input.uncertainty,
            &mut rng,
        );
        if evaluate_trial(input, &footing, &params)? {
            passed += 1;
        }
    }

    Ok(ReliabilityResult {
        width_m,
        reliability_percent: 100.0 * f64::from(passed) / f64::from(input.iterations),
    })
}

/// Run the study sequentially.
///
/// Returns one [`ReliabilityResult`] per candidate width, in input order.
/// The first trial error aborts the whole study: all trials for a width
/// share the same fixed geometry and material, so retrying is pointless.
pub fn run_study(input: &StudyInput) -> GeoResult<Vec<ReliabilityResult>> {
    input.validate()?;
    input
        .widths_m
        .iter()
        .enumerate()
        .map(|(index, &width)| run_width(input, index, width))
        .collect()
}

/// Run the study sequentially with a coarse progress/cancellation hook.
///
/// The hook is called once per completed width with (completed, total).
/// Returning [`StudyControl::Abort`] stops the study between widths; the
/// results completed so far are returned. Cancellation is cooperative and
/// never interrupts a width mid-trial.
pub fn run_study_with_progress(
    input: &StudyInput,
    mut on_width_done: impl FnMut(usize, usize) -> StudyControl,
) -> GeoResult<Vec<ReliabilityResult>> {
    input.validate()?;
    let total = input.widths_m.len();
    let mut results = Vec::with_capacity(total);
    for (index, &width) in input.widths_m.iter().enumerate() {
        results.push(run_width(input, index, width)?);
        if on_width_done(index + 1, total) == StudyControl::Abort {
            break;
        }
    }
    Ok(results)
}

/// Run the study with the width loop parallelized across worker threads.
///
/// Per-width sub-streams make this bit-identical to [`run_study`]; only
/// wall-clock time changes. No progress hook is offered here - callers
/// that need cancellation use the sequential runner.
pub fn run_study_parallel(input: &StudyInput) -> GeoResult<Vec<ReliabilityResult>> {
    input.validate()?;
    input
        .widths_m
        .par_iter()
        .enumerate()
        .map(|(index, &width)| run_width(input, index, width))
        .collect()
}
