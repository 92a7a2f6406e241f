//! # Parameter Sampler
//!
//! Draws perturbed values of the uncertain inputs (unit weight, elastic
//! modulus, vertical load) from bounded uniform distributions around their
//! nominals, using a caller-seeded generator.
//!
//! Reproducibility contract: identical seed and identical call sequence
//! produce identical samples, trial by trial. The three draws per trial
//! consume the generator in a fixed order - unit weight, then modulus,
//! then load - so changing that order changes every seeded sequence.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};
use crate::loads::LoadCase;
use crate::soil::{SoilProfile, StiffnessProfile};

/// Symmetric percentage bounds for the three uncertain inputs.
///
/// A bound p defines a uniform perturbation interval
/// [nominal·(1 − p/100), nominal·(1 + p/100)]. p = 0 pins the sample to
/// the nominal value. `Default` supplies the usual survey scatter for a
/// preliminary study: ±10% on unit weight and load, ±15% on modulus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UncertaintySpec {
    /// Unit weight variation (%)
    pub unit_weight_pct: f64,

    /// Elastic modulus variation (%)
    pub modulus_pct: f64,

    /// Vertical load variation (%)
    pub load_pct: f64,
}

impl Default for UncertaintySpec {
    fn default() -> Self {
        UncertaintySpec {
            unit_weight_pct: 10.0,
            modulus_pct: 15.0,
            load_pct: 10.0,
        }
    }
}

impl UncertaintySpec {
    /// Validate percentage bounds.
    pub fn validate(&self) -> GeoResult<()> {
        for (field, pct) in [
            ("unit_weight_pct", self.unit_weight_pct),
            ("modulus_pct", self.modulus_pct),
            ("load_pct", self.load_pct),
        ] {
            if !(0.0..=100.0).contains(&pct) {
                return Err(GeoError::invalid_configuration(
                    field,
                    pct.to_string(),
                    "Variation must be between 0 and 100 percent",
                ));
            }
        }
        Ok(())
    }
}

/// One trial's perturbed parameter draw.
#[derive(Debug, Clone, Copy)]
pub struct SampledParams {
    /// Perturbed unit weight γ (kN/m³)
    pub unit_weight_kn_m3: f64,

    /// Perturbed elastic modulus Es (kPa)
    pub modulus_kpa: f64,

    /// Perturbed vertical load P (kN)
    pub vertical_kn: f64,
}

/// One uniform draw over [nominal·(1 − pct/100), nominal·(1 + pct/100)].
///
/// A zero bound still consumes one value from the generator so the stream
/// position stays fixed regardless of which inputs are uncertain.
pub fn uniform_about(nominal: f64, pct: f64, rng: &mut impl Rng) -> f64 {
    let half = pct / 100.0;
    nominal * rng.gen_range((1.0 - half)..=(1.0 + half))
}

/// Draw one trial's perturbed parameters.
///
/// Draw order: unit weight, modulus, load.
pub fn sample_params(
    soil: &SoilProfile,
    stiffness: &StiffnessProfile,
    loads: &LoadCase,
    uncertainty: &UncertaintySpec,
    rng: &mut impl Rng,
) -> SampledParams {
    let unit_weight_kn_m3 = uniform_about(soil.unit_weight_kn_m3, uncertainty.unit_weight_pct, rng);
    let modulus_kpa = uniform_about(stiffness.modulus_kpa, uncertainty.modulus_pct, rng);
    let vertical_kn = uniform_about(loads.vertical_kn, uncertainty.load_pct, rng);
    SampledParams {
        unit_weight_kn_m3,
        modulus_kpa,
        vertical_kn,
    }
}

/// Deterministic sub-stream seed for one candidate width.
///
/// SplitMix64-style mix of the master seed and the width index. Each
/// width gets an independent generator, so a study reproduces the same
/// per-width results whether the width loop runs sequentially or in
/// parallel.
pub fn substream_seed(master_seed: u64, width_index: usize) -> u64 {
    let mut z = master_seed
        .wrapping_add((width_index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixtures() -> (SoilProfile, StiffnessProfile, LoadCase) {
        (
            SoilProfile {
                cohesion_kpa: 20.0,
                friction_angle_deg: 30.0,
                unit_weight_kn_m3: 18.0,
            },
            StiffnessProfile {
                modulus_kpa: 30000.0,
                poisson_ratio: 0.3,
                influence_factor: 1.0,
            },
            LoadCase {
                vertical_kn: 500.0,
                horizontal_kn: 80.0,
                moment_knm: 150.0,
            },
        )
    }

    #[test]
    fn test_samples_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let sample = uniform_about(18.0, 10.0, &mut rng);
            assert!(sample >= 18.0 * 0.9 && sample <= 18.0 * 1.1);
        }
    }

    #[test]
    fn test_zero_bound_is_exact() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(uniform_about(500.0, 0.0, &mut rng), 500.0);
        }
    }

    #[test]
    fn test_zero_bound_consumes_stream() {
        // A pinned draw must still advance the generator so the stream
        // position of later draws does not depend on which bounds are zero.
        let mut with_draw = StdRng::seed_from_u64(42);
        let _ = uniform_about(500.0, 0.0, &mut with_draw);
        let after_pinned: f64 = uniform_about(18.0, 10.0, &mut with_draw);

        let mut without_draw = StdRng::seed_from_u64(42);
        let first: f64 = uniform_about(18.0, 10.0, &mut without_draw);

        assert_ne!(after_pinned, first);
    }

    #[test]
    fn test_sample_sequence_reproducible() {
        let (soil, stiffness, loads) = fixtures();
        let uncertainty = UncertaintySpec::default();

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let sa = sample_params(&soil, &stiffness, &loads, &uncertainty, &mut a);
            let sb = sample_params(&soil, &stiffness, &loads, &uncertainty, &mut b);
            assert_eq!(sa.unit_weight_kn_m3, sb.unit_weight_kn_m3);
            assert_eq!(sa.modulus_kpa, sb.modulus_kpa);
            assert_eq!(sa.vertical_kn, sb.vertical_kn);
        }
    }

    #[test]
    fn test_out_of_range_bound_rejected() {
        let uncertainty = UncertaintySpec {
            load_pct: 120.0,
            ..Default::default()
        };
        let err = uncertainty.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");

        let uncertainty = UncertaintySpec {
            modulus_pct: -5.0,
            ..Default::default()
        };
        assert!(uncertainty.validate().is_err());
    }

    #[test]
    fn test_substream_seeds_distinct() {
        let seeds: Vec<u64> = (0..8).map(|i| substream_seed(42, i)).collect();
        for (i, a) in seeds.iter().enumerate() {
            for b in &seeds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_substream_seed_deterministic() {
        assert_eq!(substream_seed(42, 3), substream_seed(42, 3));
        assert_ne!(substream_seed(42, 3), substream_seed(43, 3));
    }
}
