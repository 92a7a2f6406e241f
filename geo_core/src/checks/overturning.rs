//! # Overturning Check
//!
//! Rotational stability about the footing edge: the vertical load restores
//! with lever arm B/2, so FS = (P·B/2) / M. Zero overturning moment is
//! reported as the finite sentinel
//! [`INFINITE_FS`](crate::checks::INFINITE_FS).

use serde::{Deserialize, Serialize};

use crate::checks::INFINITE_FS;
use crate::errors::{GeoError, GeoResult};
use crate::geometry::Footing;
use crate::loads::LoadCase;

/// Input parameters for the overturning check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverturningInput {
    /// Applied actions (vertical load and overturning moment)
    pub loads: LoadCase,

    /// Footing geometry (width sets the restoring lever arm)
    pub footing: Footing,

    /// Required factor of safety against overturning
    pub required_fs: f64,
}

impl OverturningInput {
    /// Validate input parameters.
    pub fn validate(&self) -> GeoResult<()> {
        self.loads.validate()?;
        self.footing.validate()?;
        if self.required_fs < 1.0 {
            return Err(GeoError::invalid_configuration(
                "required_fs",
                self.required_fs.to_string(),
                "Required factor of safety must be at least 1.0",
            ));
        }
        Ok(())
    }
}

/// Results of the overturning check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverturningResult {
    /// Restoring moment P·B/2 (kN·m)
    pub resisting_moment_knm: f64,

    /// Computed factor of safety (sentinel 999 when M = 0)
    pub fs: f64,

    /// Required factor of safety the result was checked against
    pub required_fs: f64,
}

impl OverturningResult {
    /// Check passes when the computed FS meets the requirement.
    pub fn passes(&self) -> bool {
        self.fs >= self.required_fs
    }
}

/// Overturning factor of safety: restoring moment P·B/2 over demand M.
///
/// Pure formula shared with the Monte Carlo trial evaluator.
pub fn overturning_factor(vertical_kn: f64, width_m: f64, moment_knm: f64) -> f64 {
    if moment_knm == 0.0 {
        INFINITE_FS
    } else {
        vertical_kn * (width_m / 2.0) / moment_knm
    }
}

/// Calculate the overturning factor of safety.
pub fn calculate(input: &OverturningInput) -> GeoResult<OverturningResult> {
    input.validate()?;
    Ok(OverturningResult {
        resisting_moment_knm: input.loads.vertical_kn * input.footing.width_m / 2.0,
        fs: overturning_factor(
            input.loads.vertical_kn,
            input.footing.width_m,
            input.loads.moment_knm,
        ),
        required_fs: input.required_fs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> OverturningInput {
        OverturningInput {
            loads: LoadCase {
                vertical_kn: 500.0,
                horizontal_kn: 0.0,
                moment_knm: 150.0,
            },
            footing: Footing {
                width_m: 2.0,
                length_m: 2.0,
                depth_m: 1.0,
            },
            required_fs: 2.0,
        }
    }

    #[test]
    fn test_factor_of_safety() {
        // FS = 500·(2/2) / 150 = 3.333
        let result = calculate(&test_input()).unwrap();
        assert!((result.fs - 10.0 / 3.0).abs() < 1e-9);
        assert!((result.resisting_moment_knm - 500.0).abs() < 1e-9);
        assert!(result.passes());
    }

    #[test]
    fn test_zero_moment_sentinel() {
        assert_eq!(overturning_factor(500.0, 2.0, 0.0), 999.0);
    }

    #[test]
    fn test_failing_check() {
        let mut input = test_input();
        input.loads.moment_knm = 400.0;
        // FS = 500 / 400 = 1.25 < 2.0
        let result = calculate(&input).unwrap();
        assert!(!result.passes());
    }

    #[test]
    fn test_invalid_footing_rejected() {
        let mut input = test_input();
        input.footing.width_m = -1.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }
}
