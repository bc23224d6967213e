//! # Error Types
//!
//! Structured error types for calc_core. The formulas themselves never fail;
//! errors only arise while turning user text into a dimension vector.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn parse_side(text: &str) -> CalcResult<f64> {
//!     text.trim()
//!         .parse()
//!         .map_err(|_| CalcError::invalid_input("side", text, "not a number"))
//! }
//!
//! assert!(parse_side("abc").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A dimension could not be read as a floating-point number
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Wrong number of dimensions supplied for a shape
    #[error("Dimension count mismatch for {shape}: expected {expected}, got {actual}")]
    DimensionCount {
        shape: String,
        expected: usize,
        actual: usize,
    },
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

    /// Create a DimensionCount error
    pub fn dimension_count(shape: impl Into<String>, expected: usize, actual: usize) -> Self {
        CalcError::DimensionCount {
            shape: shape.into(),
            expected,
            actual,
        }
    }

    /// Bad user input is recoverable by re-entering it from the menu.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DimensionCount { .. } => "DIMENSION_COUNT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("length", "abc", "invalid float literal");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("radius", "x", "bad").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::dimension_count("cube", 1, 2).error_code(), "DIMENSION_COUNT");
    }

    #[test]
    fn test_recoverable() {
        assert!(CalcError::invalid_input("radius", "x", "bad").is_recoverable());
        assert!(!CalcError::dimension_count("cone", 2, 3).is_recoverable());
    }

    #[test]
    fn test_display() {
        let error = CalcError::dimension_count("cuboid", 3, 1);
        assert_eq!(
            error.to_string(),
            "Dimension count mismatch for cuboid: expected 3, got 1"
        );
    }
}
