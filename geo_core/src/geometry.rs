//! # Footing Geometry
//!
//! Rectangular spread footing geometry. Width is the swept variable in a
//! reliability study: a study takes one `Footing` as a template and
//! substitutes each candidate width via [`Footing::with_width`].

use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};

/// Rectangular footing candidate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_m": 2.0,
///   "length_m": 2.0,
///   "depth_m": 1.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footing {
    /// Width B (m) - the dimension swept in a reliability study
    pub width_m: f64,

    /// Length L (m)
    pub length_m: f64,

    /// Embedment depth Df (m)
    pub depth_m: f64,
}

impl Footing {
    /// Validate footing dimensions.
    pub fn validate(&self) -> GeoResult<()> {
        if self.width_m <= 0.0 {
            return Err(GeoError::invalid_geometry(
                "width_m",
                self.width_m.to_string(),
                "Width must be positive",
            ));
        }
        if self.length_m <= 0.0 {
            return Err(GeoError::invalid_geometry(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if self.depth_m < 0.0 {
            return Err(GeoError::invalid_geometry(
                "depth_m",
                self.depth_m.to_string(),
                "Embedment depth cannot be negative",
            ));
        }
        Ok(())
    }

    /// Bearing area A = B·L (m²)
    pub fn area_m2(&self) -> f64 {
        self.width_m * self.length_m
    }

    /// Copy of this footing with a different candidate width.
    pub fn with_width(&self, width_m: f64) -> Footing {
        Footing { width_m, ..self.clone() }
    }
}
