//! # Load Case
//!
//! Nominal design actions applied to the footing. The Monte Carlo engine
//! perturbs the vertical load per trial; horizontal load and overturning
//! moment stay at their nominal values.

use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};

/// Nominal actions on the foundation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "vertical_kn": 500.0,
///   "horizontal_kn": 80.0,
///   "moment_knm": 150.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCase {
    /// Vertical load P (kN)
    pub vertical_kn: f64,

    /// Horizontal load H (kN)
    pub horizontal_kn: f64,

    /// Overturning moment M (kN·m)
    pub moment_knm: f64,
}

impl LoadCase {
    /// Validate load magnitudes (signs are conventions, not directions:
    /// all three are magnitudes and must be non-negative).
    pub fn validate(&self) -> GeoResult<()> {
        if self.vertical_kn < 0.0 {
            return Err(GeoError::invalid_configuration(
                "vertical_kn",
                self.vertical_kn.to_string(),
                "Vertical load must be non-negative",
            ));
        }
        if self.horizontal_kn < 0.0 {
            return Err(GeoError::invalid_configuration(
                "horizontal_kn",
                self.horizontal_kn.to_string(),
                "Horizontal load must be non-negative",
            ));
        }
        if self.moment_knm < 0.0 {
            return Err(GeoError::invalid_configuration(
                "moment_knm",
                self.moment_knm.to_string(),
                "Overturning moment must be non-negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_loads() {
        let loads = LoadCase {
            vertical_kn: 500.0,
            horizontal_kn: 80.0,
            moment_knm: 150.0,
        };
        assert!(loads.validate().is_ok());
    }

    #[test]
    fn test_negative_load_rejected() {
        let loads = LoadCase {
            vertical_kn: -500.0,
            horizontal_kn: 0.0,
            moment_knm: 0.0,
        };
        let err = loads.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_zero_demands_are_valid() {
        // H = 0 and M = 0 are legitimate (no sliding/overturning demand)
        let loads = LoadCase {
            vertical_kn: 500.0,
            horizontal_kn: 0.0,
            moment_knm: 0.0,
        };
        assert!(loads.validate().is_ok());
    }
}
