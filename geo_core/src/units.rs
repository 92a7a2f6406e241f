//! # Unit Types
//!
//! Type-safe wrappers for the unit conversions geo_core actually performs.
//! These are simple newtype wrappers rather than a full units library:
//! geotechnical design uses a consistent SI set (kN, kPa, m), JSON
//! serialization stays clean (just numbers), and runtime overhead is nil.
//!
//! The two conversions that matter here are meters to millimeters
//! (settlement is computed in meters and reported in millimeters) and
//! degrees to radians (friction angle is entered in degrees, trigonometry
//! wants radians).
//!
//! ## Example
//!
//! ```rust
//! use geo_core::units::{Meters, Millimeters};
//!
//! let settlement = Meters(0.00758);
//! let settlement_mm: Millimeters = settlement.into();
//! assert!((settlement_mm.0 - 7.58).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_millimeters() {
        let mm: Millimeters = Meters(0.025).into();
        assert!((mm.0 - 25.0).abs() < 1e-12);

        let back: Meters = mm.into();
        assert!((back.0 - 0.025).abs() < 1e-12);
    }

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);

        let deg: Degrees = Radians(std::f64::consts::FRAC_PI_4).into();
        assert!((deg.0 - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Millimeters(25.0)).unwrap();
        assert_eq!(json, "25.0");
    }
}
