//! # Error Types
//!
//! Structured error types for mech_core. Only invalid numeric input is a hard
//! failure for the calculators; unknown materials and unrecognized support
//! types degrade to documented defaults instead of erroring.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_mm2: f64) -> CalcResult<()> {
//!     if area_mm2 <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "area_mm2",
//!             area_mm2.to_string(),
//!             "Area must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_area(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mech_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive where a formula divides by it, NaN, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material not found in the property table (strict lookups only)
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Whether retrying the same request could succeed.
    ///
    /// Every variant is deterministic in its input, so this is always false;
    /// callers must ask for corrected input instead.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject values a formula cannot divide by or scale meaningfully.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be greater than zero"));
    }
    Ok(())
}

/// Reject NaN and infinities.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    Ok(())
}

/// Reject a computed quantity that overflowed (or underflowed to zero when
/// `allow_zero` is false) for inputs that individually passed validation.
pub(crate) fn require_representable(fields: &str, value: f64, allow_zero: bool) -> CalcResult<()> {
    if !value.is_finite() || (!allow_zero && value == 0.0) {
        return Err(CalcError::invalid_input(
            fields,
            value.to_string(),
            "Inputs produce a result outside the representable range",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("area_mm2", "0", "Value must be greater than zero");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("x", "0", "bad").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::material_not_found("Unobtainium").error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_invalid_input_not_recoverable() {
        assert!(!CalcError::invalid_input("area_mm2", "0", "zero").is_recoverable());
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("area_mm2", 100.0).is_ok());
        assert!(require_positive("area_mm2", 0.0).is_err());
        assert!(require_positive("area_mm2", -1.0).is_err());
        assert!(require_positive("area_mm2", f64::NAN).is_err());
        assert!(require_positive("area_mm2", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_representable() {
        assert!(require_representable("stress_mpa", 10.0, false).is_ok());
        assert!(require_representable("stress_mpa", 0.0, true).is_ok());
        assert!(require_representable("stress_mpa", 0.0, false).is_err());
        assert!(require_representable("stress_mpa", f64::INFINITY, true).is_err());
        assert!(require_representable("stress_mpa", f64::NEG_INFINITY, true).is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = require_positive("length_mm", 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input for 'length_mm': 0 - Value must be greater than zero"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err: CalcError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
