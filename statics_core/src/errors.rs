//! # Error Types
//!
//! Structured error types for statics_core. Every solver returns these as
//! typed results; nothing in the core panics on bad input or silently
//! approximates a system it cannot solve.
//!
//! ## Example
//!
//! ```rust
//! use statics_core::errors::{AnalysisError, StaticsResult};
//!
//! fn validate_length(length: f64) -> StaticsResult<()> {
//!     if length <= 0.0 {
//!         return Err(AnalysisError::invalid_input(
//!             "length",
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for statics_core operations
pub type StaticsResult<T> = Result<T, AnalysisError>;

/// Structured error type for analysis operations.
///
/// Determinacy errors carry both counts so a caller can tell the user
/// exactly how far the structure is from being solvable.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum AnalysisError {
    /// No supports were given
    #[error("Insufficient supports: at least one support is required")]
    InsufficientSupports,

    /// Fewer reaction unknowns than equilibrium equations (a mechanism)
    #[error("Statically unstable: {unknowns} unknowns for {equations} equilibrium equations")]
    StaticallyUnstable { unknowns: usize, equations: usize },

    /// More reaction unknowns than equilibrium equations
    #[error("Statically indeterminate: {unknowns} unknowns for {equations} equilibrium equations")]
    StaticallyIndeterminate { unknowns: usize, equations: usize },

    /// The linear system could not be solved (singular or ill-conditioned)
    #[error("Matrix solution failed: {reason}")]
    MatrixSolutionFailed { reason: String },

    /// Conversion between units of different dimensions
    #[error("Unsupported unit conversion: {from} to {to}")]
    UnsupportedUnitConversion { from: String, to: String },

    /// An input value is invalid (out of range, dangling reference, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material grade not found in the catalog
    #[error("Material not found: {grade}")]
    MaterialNotFound { grade: String },
}

impl AnalysisError {
    /// Create a StaticallyUnstable error
    pub fn unstable(unknowns: usize, equations: usize) -> Self {
        AnalysisError::StaticallyUnstable { unknowns, equations }
    }

    /// Create a StaticallyIndeterminate error
    pub fn indeterminate(unknowns: usize, equations: usize) -> Self {
        AnalysisError::StaticallyIndeterminate { unknowns, equations }
    }

    /// Create a MatrixSolutionFailed error
    pub fn matrix_failed(reason: impl Into<String>) -> Self {
        AnalysisError::MatrixSolutionFailed {
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedUnitConversion error
    pub fn unsupported_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        AnalysisError::UnsupportedUnitConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(grade: impl Into<String>) -> Self {
        AnalysisError::MaterialNotFound {
            grade: grade.into(),
        }
    }

    /// True for the determinacy family of errors (the geometry itself is the problem)
    pub fn is_determinacy_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::InsufficientSupports
                | AnalysisError::StaticallyUnstable { .. }
                | AnalysisError::StaticallyIndeterminate { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AnalysisError::InsufficientSupports => "INSUFFICIENT_SUPPORTS",
            AnalysisError::StaticallyUnstable { .. } => "STATICALLY_UNSTABLE",
            AnalysisError::StaticallyIndeterminate { .. } => "STATICALLY_INDETERMINATE",
            AnalysisError::MatrixSolutionFailed { .. } => "MATRIX_SOLUTION_FAILED",
            AnalysisError::UnsupportedUnitConversion { .. } => "UNSUPPORTED_UNIT_CONVERSION",
            AnalysisError::InvalidInput { .. } => "INVALID_INPUT",
            AnalysisError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = AnalysisError::indeterminate(6, 2);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"StaticallyIndeterminate\""));
        let roundtrip: AnalysisError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_messages_name_counts() {
        let msg = AnalysisError::indeterminate(6, 2).to_string();
        assert!(msg.contains('6') && msg.contains('2'));

        let msg = AnalysisError::unstable(1, 2).to_string();
        assert_eq!(msg, "Statically unstable: 1 unknowns for 2 equilibrium equations");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AnalysisError::InsufficientSupports.error_code(), "INSUFFICIENT_SUPPORTS");
        assert_eq!(
            AnalysisError::unsupported_conversion("kN", "m").error_code(),
            "UNSUPPORTED_UNIT_CONVERSION"
        );
        assert_eq!(AnalysisError::material_not_found("S999").error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_determinacy_family() {
        assert!(AnalysisError::InsufficientSupports.is_determinacy_error());
        assert!(AnalysisError::unstable(1, 2).is_determinacy_error());
        assert!(!AnalysisError::matrix_failed("singular").is_determinacy_error());
    }
}
