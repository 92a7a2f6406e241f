//! # Error Types
//!
//! Structured error types for geo_core. These errors are designed to be
//! informative for both humans and calling programs, providing enough
//! context to understand and fix issues programmatically.
//!
//! Malformed width-list tokens are deliberately NOT represented here:
//! the parser collects them as data (see [`crate::parse`]) instead of
//! failing the whole parse.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::errors::{GeoError, GeoResult};
//!
//! fn validate_width(width_m: f64) -> GeoResult<()> {
//!     if width_m <= 0.0 {
//!         return Err(GeoError::InvalidGeometry {
//!             field: "width_m".to_string(),
//!             value: width_m.to_string(),
//!             reason: "Width must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for geo_core operations
pub type GeoResult<T> = Result<T, GeoError>;

/// Structured error type for foundation design operations.
///
/// Each variant provides specific context about what went wrong. The
/// formula functions fail fast with these errors rather than letting
/// NaN/Infinity leak into results and silently mark a trial "safe".
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GeoError {
    /// Footing geometry is unusable (non-positive width/length, negative depth)
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// Soil or stiffness property is out of its physical range
    #[error("Invalid material for '{field}': {value} - {reason}")]
    InvalidMaterial {
        field: String,
        value: String,
        reason: String,
    },

    /// Study configuration cannot be run (iterations, width list, bounds)
    #[error("Invalid configuration for '{field}': {value} - {reason}")]
    InvalidConfiguration {
        field: String,
        value: String,
        reason: String,
    },
}

impl GeoError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidMaterial error
    pub fn invalid_material(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoError::InvalidMaterial {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoError::InvalidConfiguration {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GeoError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            GeoError::InvalidMaterial { .. } => "INVALID_MATERIAL",
            GeoError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = GeoError::invalid_geometry("width_m", "-2.0", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: GeoError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            GeoError::invalid_material("modulus_kpa", "0", "Modulus must be positive").error_code(),
            "INVALID_MATERIAL"
        );
        assert_eq!(
            GeoError::invalid_configuration("iterations", "0", "At least one trial required").error_code(),
            "INVALID_CONFIGURATION"
        );
    }

    #[test]
    fn test_error_display() {
        let error = GeoError::invalid_configuration("iterations", "0", "At least one trial required");
        let text = error.to_string();
        assert!(text.contains("iterations"));
        assert!(text.contains("At least one trial required"));
    }
}
