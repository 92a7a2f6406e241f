//! # Sliding Check
//!
//! Horizontal translation resisted by base friction: FS = μ·P / H.
//! Zero horizontal load means there is nothing to slide against, reported
//! as the finite sentinel [`INFINITE_FS`](crate::checks::INFINITE_FS)
//! rather than an error or a division blow-up.

use serde::{Deserialize, Serialize};

use crate::checks::INFINITE_FS;
use crate::errors::{GeoError, GeoResult};
use crate::loads::LoadCase;

/// Input parameters for the sliding check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlidingInput {
    /// Applied actions (vertical and horizontal loads)
    pub loads: LoadCase,

    /// Base friction coefficient μ
    pub friction_coeff: f64,

    /// Required factor of safety against sliding
    pub required_fs: f64,
}

impl SlidingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> GeoResult<()> {
        self.loads.validate()?;
        if self.friction_coeff < 0.0 {
            return Err(GeoError::invalid_configuration(
                "friction_coeff",
                self.friction_coeff.to_string(),
                "Friction coefficient must be non-negative",
            ));
        }
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

/// Results of the sliding check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlidingResult {
    /// Computed factor of safety (sentinel 999 when H = 0)
    pub fs: f64,

    /// Required factor of safety the result was checked against
    pub required_fs: f64,
}

impl SlidingResult {
    /// Check passes when the computed FS meets the requirement.
    pub fn passes(&self) -> bool {
        self.fs >= self.required_fs
    }
}

/// Sliding factor of safety: resistance μ·P over demand H.
///
/// Pure formula shared with the Monte Carlo trial evaluator.
pub fn sliding_factor(vertical_kn: f64, horizontal_kn: f64, friction_coeff: f64) -> f64 {
    if horizontal_kn == 0.0 {
        INFINITE_FS
    } else {
        vertical_kn * friction_coeff / horizontal_kn
    }
}

/// Calculate the sliding factor of safety.
pub fn calculate(input: &SlidingInput) -> GeoResult<SlidingResult> {
    input.validate()?;
    Ok(SlidingResult {
        fs: sliding_factor(
            input.loads.vertical_kn,
            input.loads.horizontal_kn,
            input.friction_coeff,
        ),
        required_fs: input.required_fs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> SlidingInput {
        SlidingInput {
            loads: LoadCase {
                vertical_kn: 500.0,
                horizontal_kn: 50.0,
                moment_knm: 0.0,
            },
            friction_coeff: 0.5,
            required_fs: 1.5,
        }
    }

    #[test]
    fn test_factor_of_safety() {
        // FS = 500·0.5 / 50 = 5.0
        let result = calculate(&test_input()).unwrap();
        assert!((result.fs - 5.0).abs() < 1e-12);
        assert!(result.passes());
    }

    #[test]
    fn test_zero_horizontal_load_sentinel() {
        // No sliding demand: finite sentinel, not infinity/NaN/error
        assert_eq!(sliding_factor(500.0, 0.0, 0.5), 999.0);
    }

    #[test]
    fn test_failing_check() {
        let mut input = test_input();
        input.loads.horizontal_kn = 400.0;
        // FS = 250 / 400 = 0.625
        let result = calculate(&input).unwrap();
        assert!(!result.passes());
    }

    #[test]
    fn test_negative_friction_rejected() {
        let mut input = test_input();
        input.friction_coeff = -0.1;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }
}
