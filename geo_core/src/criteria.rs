//! # Safety Criteria
//!
//! Required factors of safety and the allowable settlement. These are
//! explicit configuration carried by every check and study input; the
//! engine holds no module-level defaults. `Default` supplies the usual
//! code-practice values for spread footings.

use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};

/// Pass/fail thresholds for the four foundation checks.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bearing_fs": 3.0,
///   "sliding_fs": 1.5,
///   "overturning_fs": 2.0,
///   "settlement_limit_mm": 25.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyCriteria {
    /// Required factor of safety against bearing failure
    pub bearing_fs: f64,

    /// Required factor of safety against sliding
    pub sliding_fs: f64,

    /// Required factor of safety against overturning
    pub overturning_fs: f64,

    /// Maximum allowable settlement (mm)
    pub settlement_limit_mm: f64,
}

impl Default for SafetyCriteria {
    fn default() -> Self {
        SafetyCriteria {
            bearing_fs: 3.0,
            sliding_fs: 1.5,
            overturning_fs: 2.0,
            settlement_limit_mm: 25.0,
        }
    }
}

impl SafetyCriteria {
    /// Validate thresholds. A required factor of safety below 1.0 would
    /// accept capacities smaller than demands.
    pub fn validate(&self) -> GeoResult<()> {
        for (field, fs) in [
            ("bearing_fs", self.bearing_fs),
            ("sliding_fs", self.sliding_fs),
            ("overturning_fs", self.overturning_fs),
        ] {
            if fs < 1.0 {
                return Err(GeoError::invalid_configuration(
                    field,
                    fs.to_string(),
                    "Required factor of safety must be at least 1.0",
                ));
            }
        }
        if self.settlement_limit_mm <= 0.0 {
            return Err(GeoError::invalid_configuration(
                "settlement_limit_mm",
                self.settlement_limit_mm.to_string(),
                "Settlement limit must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let criteria = SafetyCriteria::default();
        assert_eq!(criteria.bearing_fs, 3.0);
        assert_eq!(criteria.sliding_fs, 1.5);
        assert_eq!(criteria.overturning_fs, 2.0);
        assert_eq!(criteria.settlement_limit_mm, 25.0);
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn test_fs_below_one_rejected() {
        let criteria = SafetyCriteria {
            sliding_fs: 0.8,
            ..Default::default()
        };
        let err = criteria.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_settlement_limit_positive() {
        let criteria = SafetyCriteria {
            settlement_limit_mm: 0.0,
            ..Default::default()
        };
        assert!(criteria.validate().is_err());
    }
}
