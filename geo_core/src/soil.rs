//! # Soil Properties
//!
//! Soil strength and stiffness parameters used by the foundation checks.
//! Values are the caller-supplied nominals; the Monte Carlo engine perturbs
//! unit weight and elastic modulus per trial without mutating these structs.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::soil::SoilProfile;
//!
//! let soil = SoilProfile {
//!     cohesion_kpa: 20.0,
//!     friction_angle_deg: 30.0,
//!     unit_weight_kn_m3: 18.0,
//! };
//! assert!(soil.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};

/// Shear strength and weight parameters of the bearing stratum.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cohesion_kpa": 20.0,
///   "friction_angle_deg": 30.0,
///   "unit_weight_kn_m3": 18.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilProfile {
    /// Cohesion c (kPa), zero for purely frictional soil
    pub cohesion_kpa: f64,

    /// Internal friction angle φ (degrees), 0 for purely cohesive soil
    pub friction_angle_deg: f64,

    /// Unit weight γ (kN/m³)
    pub unit_weight_kn_m3: f64,
}

impl SoilProfile {
    /// Validate soil parameters against their physical ranges.
    pub fn validate(&self) -> GeoResult<()> {
        if self.cohesion_kpa < 0.0 {
            return Err(GeoError::invalid_material(
                "cohesion_kpa",
                self.cohesion_kpa.to_string(),
                "Cohesion cannot be negative",
            ));
        }
        if !(0.0..=45.0).contains(&self.friction_angle_deg) {
            return Err(GeoError::invalid_material(
                "friction_angle_deg",
                self.friction_angle_deg.to_string(),
                "Friction angle must be between 0 and 45 degrees",
            ));
        }
        if self.unit_weight_kn_m3 <= 0.0 {
            return Err(GeoError::invalid_material(
                "unit_weight_kn_m3",
                self.unit_weight_kn_m3.to_string(),
                "Unit weight must be positive",
            ));
        }
        Ok(())
    }

    /// Purely cohesive soil (φ = 0), where the surcharge factor Nq
    /// degenerates to 1 and Nγ to 0.
    pub fn is_cohesive(&self) -> bool {
        self.friction_angle_deg == 0.0
    }
}

/// Elastic parameters of the soil for settlement estimation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "modulus_kpa": 30000.0,
///   "poisson_ratio": 0.3,
///   "influence_factor": 1.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StiffnessProfile {
    /// Elastic modulus Es (kPa)
    pub modulus_kpa: f64,

    /// Poisson ratio ν, 0 ≤ ν < 0.5
    pub poisson_ratio: f64,

    /// Settlement influence factor I
    pub influence_factor: f64,
}

impl StiffnessProfile {
    /// Validate stiffness parameters against their physical ranges.
    pub fn validate(&self) -> GeoResult<()> {
        if self.modulus_kpa <= 0.0 {
            return Err(GeoError::invalid_material(
                "modulus_kpa",
                self.modulus_kpa.to_string(),
                "Elastic modulus must be positive",
            ));
        }
        if !(0.0..0.5).contains(&self.poisson_ratio) {
            return Err(GeoError::invalid_material(
                "poisson_ratio",
                self.poisson_ratio.to_string(),
                "Poisson ratio must be in [0, 0.5)",
            ));
        }
        if self.influence_factor <= 0.0 {
            return Err(GeoError::invalid_material(
                "influence_factor",
                self.influence_factor.to_string(),
                "Influence factor must be positive",
            ));
        }
        Ok(())
    }
}
