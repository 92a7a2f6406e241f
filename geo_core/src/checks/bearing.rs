//! # Bearing Capacity Check
//!
//! Terzaghi-type ultimate bearing capacity for a rectangular spread
//! footing, with the general shear factors:
//!
//! - Nc = 5.14
//! - Nq = e^(π·tanφ)·tan²(45° + φ/2) for φ > 0, else 1
//! - Nγ = 2·(Nq + 1)·tanφ for φ > 0, else 0
//!
//! q_ult = c·Nc + γ·Df·Nq + 0.5·γ·B·Nγ
//!
//! The φ = 0 branch is handled explicitly so a purely cohesive soil gets
//! Nq = 1 rather than a tan(0)-poisoned zero.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::checks::bearing::{calculate, BearingInput};
//! use geo_core::geometry::Footing;
//! use geo_core::soil::SoilProfile;
//!
//! let input = BearingInput {
//!     soil: SoilProfile {
//!         cohesion_kpa: 20.0,
//!         friction_angle_deg: 0.0,
//!         unit_weight_kn_m3: 18.0,
//!     },
//!     footing: Footing { width_m: 2.0, length_m: 2.0, depth_m: 1.0 },
//!     required_fs: 3.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.q_ult_kpa - 120.8).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};
use crate::geometry::Footing;
use crate::soil::SoilProfile;
use crate::units::{Degrees, Radians};

/// Cohesion bearing capacity factor Nc (constant in this formulation)
pub const NC: f64 = 5.14;

/// Input parameters for the bearing capacity check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearingInput {
    /// Bearing stratum properties
    pub soil: SoilProfile,

    /// Footing geometry
    pub footing: Footing,

    /// Required factor of safety on ultimate capacity
    pub required_fs: f64,
}

impl BearingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> GeoResult<()> {
        self.soil.validate()?;
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

/// Results of the bearing capacity check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "nq": 18.4,
///   "ngamma": 22.4,
///   "q_ult_kpa": 736.1,
///   "q_allow_kpa": 245.4
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearingResult {
    /// Surcharge factor Nq used
    pub nq: f64,

    /// Self-weight factor Nγ used
    pub ngamma: f64,

    /// Ultimate bearing capacity q_ult (kPa)
    pub q_ult_kpa: f64,

    /// Allowable bearing capacity q_allow = q_ult / FS (kPa)
    pub q_allow_kpa: f64,
}

/// Bearing capacity factors (Nq, Nγ) for a friction angle in degrees.
///
/// Nc is the constant [`NC`]. The φ = 0 case returns (1, 0) without
/// touching the frictional expressions.
pub fn capacity_factors(friction_angle_deg: f64) -> (f64, f64) {
    if friction_angle_deg > 0.0 {
        let Radians(phi) = Degrees(friction_angle_deg).into();
        let Radians(wedge) = Degrees(45.0 + friction_angle_deg / 2.0).into();
        let nq = (std::f64::consts::PI * phi.tan()).exp() * wedge.tan().powi(2);
        let ngamma = 2.0 * (nq + 1.0) * phi.tan();
        (nq, ngamma)
    } else {
        (1.0, 0.0)
    }
}

/// Ultimate bearing capacity q_ult (kPa).
///
/// Pure formula used both by [`calculate`] and by the Monte Carlo trial
/// evaluator with a sampled unit weight. Fails rather than returning a
/// meaningless capacity when the width is not positive.
pub fn ultimate_bearing_capacity(
    cohesion_kpa: f64,
    unit_weight_kn_m3: f64,
    depth_m: f64,
    width_m: f64,
    friction_angle_deg: f64,
) -> GeoResult<f64> {
    if width_m <= 0.0 {
        return Err(GeoError::invalid_geometry(
            "width_m",
            width_m.to_string(),
            "Width must be positive",
        ));
    }
    let (nq, ngamma) = capacity_factors(friction_angle_deg);
    Ok(cohesion_kpa * NC
        + unit_weight_kn_m3 * depth_m * nq
        + 0.5 * unit_weight_kn_m3 * width_m * ngamma)
}

/// Calculate ultimate and allowable bearing capacity.
///
/// # Returns
///
/// * `Ok(BearingResult)` - Capacities and the factors used
/// * `Err(GeoError)` - Structured error if inputs are invalid
pub fn calculate(input: &BearingInput) -> GeoResult<BearingResult> {
    input.validate()?;

    let (nq, ngamma) = capacity_factors(input.soil.friction_angle_deg);
    let q_ult_kpa = ultimate_bearing_capacity(
        input.soil.cohesion_kpa,
        input.soil.unit_weight_kn_m3,
        input.footing.depth_m,
        input.footing.width_m,
        input.soil.friction_angle_deg,
    )?;

    Ok(BearingResult {
        nq,
        ngamma,
        q_ult_kpa,
        q_allow_kpa: q_ult_kpa / input.required_fs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> BearingInput {
        BearingInput {
            soil: SoilProfile {
                cohesion_kpa: 20.0,
                friction_angle_deg: 30.0,
                unit_weight_kn_m3: 18.0,
            },
            footing: Footing {
                width_m: 2.0,
                length_m: 2.0,
                depth_m: 1.0,
            },
            required_fs: 3.0,
        }
    }

    #[test]
    fn test_cohesive_capacity_exact() {
        // φ = 0: q_ult = 20·5.14 + 18·1·1 + 0 = 120.8 kPa
        let q_ult = ultimate_bearing_capacity(20.0, 18.0, 1.0, 2.0, 0.0).unwrap();
        assert!((q_ult - 120.8).abs() < 1e-9);
    }

    #[test]
    fn test_cohesive_factors() {
        let (nq, ngamma) = capacity_factors(0.0);
        assert_eq!(nq, 1.0);
        assert_eq!(ngamma, 0.0);
    }

    #[test]
    fn test_frictional_factors_phi_30() {
        // Reissner/Vesic values for φ = 30°: Nq ≈ 18.40, Nγ ≈ 22.40
        let (nq, ngamma) = capacity_factors(30.0);
        assert!((nq - 18.40).abs() < 0.01);
        assert!((ngamma - 22.40).abs() < 0.01);
    }

    #[test]
    fn test_allowable_is_ultimate_over_fs() {
        let result = calculate(&test_input()).unwrap();
        assert!((result.q_allow_kpa - result.q_ult_kpa / 3.0).abs() < 1e-9);
        assert!(result.q_ult_kpa > 0.0);
    }

    #[test]
    fn test_capacity_grows_with_width() {
        // Nγ term is proportional to B for frictional soil
        let narrow = ultimate_bearing_capacity(20.0, 18.0, 1.0, 1.5, 30.0).unwrap();
        let wide = ultimate_bearing_capacity(20.0, 18.0, 1.0, 2.5, 30.0).unwrap();
        assert!(wide > narrow);
    }

    #[test]
    fn test_zero_width_fails() {
        let err = ultimate_bearing_capacity(20.0, 18.0, 1.0, 0.0, 30.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_invalid_soil_rejected() {
        let mut input = test_input();
        input.soil.friction_angle_deg = 60.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_input()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("q_ult_kpa"));
        assert!(json.contains("q_allow_kpa"));
    }
}
