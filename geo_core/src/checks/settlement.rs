//! # Elastic Settlement Check
//!
//! Immediate settlement of a rectangular footing on an elastic half-space:
//!
//! s = I·q·B·(1 − ν²) / Es, with q = P / (B·L)
//!
//! With loads in kN, lengths in meters and modulus in kPa the result is in
//! meters; the check reports millimeters through the unit wrappers.

use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};
use crate::geometry::Footing;
use crate::loads::LoadCase;
use crate::soil::StiffnessProfile;
use crate::units::{Meters, Millimeters};

/// Input parameters for the settlement check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementInput {
    /// Applied actions (vertical load)
    pub loads: LoadCase,

    /// Footing geometry
    pub footing: Footing,

    /// Elastic soil parameters
    pub stiffness: StiffnessProfile,
}

impl SettlementInput {
    /// Validate input parameters.
    pub fn validate(&self) -> GeoResult<()> {
        self.loads.validate()?;
        self.footing.validate()?;
        self.stiffness.validate()
    }
}

/// Results of the settlement check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bearing_pressure_kpa": 125.0,
///   "settlement_mm": 7.583
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Applied bearing pressure q = P/(B·L) (kPa)
    pub bearing_pressure_kpa: f64,

    /// Computed elastic settlement (mm)
    pub settlement_mm: f64,
}

/// Elastic settlement in meters.
///
/// Pure formula shared with the Monte Carlo trial evaluator. Fails fast on
/// non-positive bearing area or modulus instead of producing an Infinity
/// that would silently pass a limit comparison.
pub fn elastic_settlement_m(
    load_kn: f64,
    width_m: f64,
    length_m: f64,
    modulus_kpa: f64,
    poisson_ratio: f64,
    influence_factor: f64,
) -> GeoResult<f64> {
    let area_m2 = width_m * length_m;
    if area_m2 <= 0.0 {
        return Err(GeoError::invalid_geometry(
            "width_m * length_m",
            area_m2.to_string(),
            "Bearing area must be positive",
        ));
    }
    if modulus_kpa <= 0.0 {
        return Err(GeoError::invalid_material(
            "modulus_kpa",
            modulus_kpa.to_string(),
            "Elastic modulus must be positive",
        ));
    }
    if !(0.0..0.5).contains(&poisson_ratio) {
        return Err(GeoError::invalid_material(
            "poisson_ratio",
            poisson_ratio.to_string(),
            "Poisson ratio must be in [0, 0.5)",
        ));
    }
    let q_kpa = load_kn / area_m2;
    Ok(influence_factor * q_kpa * width_m * (1.0 - poisson_ratio.powi(2)) / modulus_kpa)
}

/// Calculate elastic settlement in millimeters.
pub fn calculate(input: &SettlementInput) -> GeoResult<SettlementResult> {
    input.validate()?;

    let settlement = Meters(elastic_settlement_m(
        input.loads.vertical_kn,
        input.footing.width_m,
        input.footing.length_m,
        input.stiffness.modulus_kpa,
        input.stiffness.poisson_ratio,
        input.stiffness.influence_factor,
    )?);
    let Millimeters(settlement_mm) = settlement.into();

    Ok(SettlementResult {
        bearing_pressure_kpa: input.loads.vertical_kn / input.footing.area_m2(),
        settlement_mm,
    })
}
