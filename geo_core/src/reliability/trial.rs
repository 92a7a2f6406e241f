//! # Trial Evaluator
//!
//! Evaluates one Monte Carlo trial: given one sampled parameter draw and
//! the fixed study setup, applies the four foundation checks and reduces
//! them to a single pass/fail. A trial passes only when every check
//! passes; there is no partial credit and no weighting.

use crate::checks::bearing::ultimate_bearing_capacity;
use crate::checks::overturning::overturning_factor;
use crate::checks::settlement::elastic_settlement_m;
use crate::checks::sliding::sliding_factor;
use crate::errors::GeoResult;
use crate::geometry::Footing;
use crate::reliability::sampler::SampledParams;
use crate::reliability::study::StudyInput;
use crate::units::{Meters, Millimeters};

/// Evaluate one trial against all four checks.
///
/// `footing` already carries the candidate width under test; `params` is
/// this trial's perturbed (γ, Es, P) draw. Everything else is read from
/// the fixed study input. Errors from the formula functions propagate;
/// the aggregator treats them as fatal for the whole study.
pub(crate) fn evaluate_trial(
    input: &StudyInput,
    footing: &Footing,
    params: &SampledParams,
) -> GeoResult<bool> {
    // Bearing: allowable pressure vs applied pressure
    let q_ult_kpa = ultimate_bearing_capacity(
        input.soil.cohesion_kpa,
        params.unit_weight_kn_m3,
        footing.depth_m,
        footing.width_m,
        input.soil.friction_angle_deg,
    )?;
    let q_allow_kpa = q_ult_kpa / input.criteria.bearing_fs;
    let q_applied_kpa = params.vertical_kn / footing.area_m2();
    let bearing_ok = q_allow_kpa >= q_applied_kpa;

    // Sliding
    let sliding_ok = sliding_factor(
        params.vertical_kn,
        input.loads.horizontal_kn,
        input.friction_coeff,
    ) >= input.criteria.sliding_fs;

    // Overturning
    let overturning_ok = overturning_factor(
        params.vertical_kn,
        footing.width_m,
        input.loads.moment_knm,
    ) >= input.criteria.overturning_fs;

    // Settlement
    let settlement = Meters(elastic_settlement_m(
        params.vertical_kn,
        footing.width_m,
        footing.length_m,
        params.modulus_kpa,
        input.stiffness.poisson_ratio,
        input.stiffness.influence_factor,
    )?);
    let Millimeters(settlement_mm) = settlement.into();
    let settlement_ok = settlement_mm <= input.criteria.settlement_limit_mm;

    Ok(bearing_ok && sliding_ok && overturning_ok && settlement_ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::SafetyCriteria;
    use crate::loads::LoadCase;
    use crate::reliability::sampler::UncertaintySpec;
    use crate::soil::{SoilProfile, StiffnessProfile};

    fn test_study() -> StudyInput {
        StudyInput {
            soil: SoilProfile {
                cohesion_kpa: 20.0,
                friction_angle_deg: 30.0,
                unit_weight_kn_m3: 18.0,
            },
            loads: LoadCase {
                vertical_kn: 500.0,
                horizontal_kn: 80.0,
                moment_knm: 150.0,
            },
            footing: Footing {
                width_m: 2.0,
                length_m: 2.0,
                depth_m: 1.0,
            },
            stiffness: StiffnessProfile {
                modulus_kpa: 30000.0,
                poisson_ratio: 0.3,
                influence_factor: 1.0,
            },
            uncertainty: UncertaintySpec::default(),
            criteria: SafetyCriteria::default(),
            friction_coeff: 0.5,
            widths_m: vec![2.0],
            iterations: 1,
            seed: 42,
        }
    }

    fn nominal_params(input: &StudyInput) -> SampledParams {
        SampledParams {
            unit_weight_kn_m3: input.soil.unit_weight_kn_m3,
            modulus_kpa: input.stiffness.modulus_kpa,
            vertical_kn: input.loads.vertical_kn,
        }
    }

    #[test]
    fn test_nominal_trial_passes() {
        // At nominal values this footing is comfortably safe on all four
        // checks (q_allow ≈ 279 vs 125 kPa applied, FS_slide ≈ 3.1,
        // FS_ot ≈ 3.3, s ≈ 7.6 mm vs 25 mm)
        let input = test_study();
        let footing = input.footing.clone();
        assert!(evaluate_trial(&input, &footing, &nominal_params(&input)).unwrap());
    }

    #[test]
    fn test_all_checks_must_pass() {
        // Push only the sliding demand past its margin; the other three
        // checks still pass, but the trial must fail
        let mut input = test_study();
        input.loads.horizontal_kn = 200.0;
        let footing = input.footing.clone();
        assert!(!evaluate_trial(&input, &footing, &nominal_params(&input)).unwrap());
    }

    #[test]
    fn test_overload_fails_bearing() {
        let input = test_study();
        let footing = input.footing.clone();
        let mut params = nominal_params(&input);
        params.vertical_kn = 50000.0;
        assert!(!evaluate_trial(&input, &footing, &params).unwrap());
    }

    #[test]
    fn test_settlement_limit_enforced() {
        let mut input = test_study();
        input.criteria.settlement_limit_mm = 5.0;
        let footing = input.footing.clone();
        // s ≈ 7.6 mm > 5 mm limit
        assert!(!evaluate_trial(&input, &footing, &nominal_params(&input)).unwrap());
    }

    #[test]
    fn test_invalid_width_propagates_error() {
        let input = test_study();
        let footing = input.footing.with_width(-1.0);
        assert!(evaluate_trial(&input, &footing, &nominal_params(&input)).is_err());
    }
}
