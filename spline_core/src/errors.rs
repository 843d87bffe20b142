//! # Error Types
//!
//! Structured error types for spline_core. Every failure is raised at the
//! point of detection and carries enough context to tell the designer which
//! part of the specification string to fix.
//!
//! ## Example
//!
//! ```rust
//! use spline_core::errors::{SplineError, SplineResult};
//!
//! fn check_teeth(teeth: u32) -> SplineResult<()> {
//!     if teeth == 0 {
//!         return Err(SplineError::invalid_input(
//!             "teeth",
//!             teeth.to_string(),
//!             "Number of teeth must be at least 1",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_teeth(0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for spline_core operations
pub type SplineResult<T> = Result<T, SplineError>;

/// Structured error type for parsing and calculation.
///
/// No variant is recoverable by retrying: the derivation is a pure function
/// of its input, so the caller has to change the specification instead.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SplineError {
    /// Token count or token shape does not match the grammar of the detected standard
    #[error("Malformed specification '{spec}': {reason}")]
    MalformedSpecification { spec: String, reason: String },

    /// A single field parsed but carries an unusable value
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A size parameter is outside the coverage of the standard's tables
    #[error("Out of range: {quantity} = {value} (limit {limit})")]
    OutOfRange {
        quantity: String,
        value: f64,
        limit: String,
    },

    /// Fit letter (ISO) or fit/root combination (ANSI) not covered by the standard
    #[error("Unsupported fit '{fit}' for {standard}")]
    UnsupportedFit { standard: String, fit: String },

    /// Tolerance grade/class outside 4..=7
    #[error("Unsupported tolerance grade {grade} for {standard} (expected 4 to 7)")]
    UnsupportedToleranceGrade { standard: String, grade: u8 },

    /// Pressure angle outside {30, 37.5, 45}
    #[error("Unsupported pressure angle {angle_deg} deg for {standard} (expected 30, 37.5 or 45)")]
    UnsupportedPressureAngle { standard: String, angle_deg: f64 },

    /// The standard is recognized but has no derivation
    #[error("Not implemented: {standard} - {reason}")]
    NotImplemented { standard: String, reason: String },
}

impl SplineError {
    /// Create a MalformedSpecification error
    pub fn malformed(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        SplineError::MalformedSpecification {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SplineError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(quantity: impl Into<String>, value: f64, limit: impl Into<String>) -> Self {
        SplineError::OutOfRange {
            quantity: quantity.into(),
            value,
            limit: limit.into(),
        }
    }

    /// Create an UnsupportedFit error
    pub fn unsupported_fit(standard: impl Into<String>, fit: impl Into<String>) -> Self {
        SplineError::UnsupportedFit {
            standard: standard.into(),
            fit: fit.into(),
        }
    }

    /// Create an UnsupportedToleranceGrade error
    pub fn unsupported_grade(standard: impl Into<String>, grade: u8) -> Self {
        SplineError::UnsupportedToleranceGrade {
            standard: standard.into(),
            grade,
        }
    }

    /// Create an UnsupportedPressureAngle error
    pub fn unsupported_pressure_angle(standard: impl Into<String>, angle_deg: f64) -> Self {
        SplineError::UnsupportedPressureAngle {
            standard: standard.into(),
            angle_deg,
        }
    }

    /// Create a NotImplemented error
    pub fn not_implemented(standard: impl Into<String>, reason: impl Into<String>) -> Self {
        SplineError::NotImplemented {
            standard: standard.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SplineError::MalformedSpecification { .. } => "MALFORMED_SPECIFICATION",
            SplineError::InvalidInput { .. } => "INVALID_INPUT",
            SplineError::OutOfRange { .. } => "OUT_OF_RANGE",
            SplineError::UnsupportedFit { .. } => "UNSUPPORTED_FIT",
            SplineError::UnsupportedToleranceGrade { .. } => "UNSUPPORTED_TOLERANCE_GRADE",
            SplineError::UnsupportedPressureAngle { .. } => "UNSUPPORTED_PRESSURE_ANGLE",
            SplineError::NotImplemented { .. } => "NOT_IMPLEMENTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SplineError::out_of_range("pitch_diameter_mm", 1000.5, "1000");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"OutOfRange\""));
        let roundtrip: SplineError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SplineError::malformed("EXT 25z", "too few fields").error_code(),
            "MALFORMED_SPECIFICATION"
        );
        assert_eq!(
            SplineError::unsupported_grade("ISO 4156", 9).error_code(),
            "UNSUPPORTED_TOLERANCE_GRADE"
        );
        assert_eq!(
            SplineError::not_implemented("BS 3550", "no derivation").error_code(),
            "NOT_IMPLEMENTED"
        );
    }

    #[test]
    fn test_error_display() {
        let error = SplineError::unsupported_pressure_angle("ISO 4156", 20.0);
        assert_eq!(
            error.to_string(),
            "Unsupported pressure angle 20 deg for ISO 4156 (expected 30, 37.5 or 45)"
        );
    }
}
