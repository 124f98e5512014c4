//! # Error Types
//!
//! Structured error types for motor_core. Every error names the field or
//! operation that failed so a caller can surface it to the end user
//! without re-deriving what went wrong.
//!
//! Two kinds of failure come out of a calculation:
//!
//! - **Validation** ([`SizingError::InvalidInput`]) - an input record field
//!   violates its bounds. Raised once, at construction.
//! - **Domain** ([`SizingError::DomainError`]) - a method argument violates
//!   a local precondition (non-positive force, mismatched duty cycle, ...).
//!
//! Neither is retryable: calculations are deterministic, so the same inputs
//! reproduce the same error.
//!
//! ## Example
//!
//! ```rust
//! use motor_core::errors::{SizingError, SizingResult};
//!
//! fn validate_radius(drum_radius_m: f64) -> SizingResult<()> {
//!     if !(drum_radius_m > 0.0) {
//!         return Err(SizingError::invalid_input(
//!             "drum_radius_m",
//!             drum_radius_m.to_string(),
//!             "Drum radius must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_radius(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for motor_core operations
pub type SizingResult<T> = Result<T, SizingError>;

/// Structured error type for sizing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SizingError {
    /// An input record field is out of range or not a number
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A method argument violates the operation's precondition
    #[error("Domain error in {operation}: {reason}")]
    DomainError { operation: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Report schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl SizingError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SizingError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DomainError
    pub fn domain(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        SizingError::DomainError {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SizingError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        SizingError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors raised while validating an input record
    pub fn is_validation(&self) -> bool {
        matches!(self, SizingError::InvalidInput { .. })
    }

    /// True for errors raised by a method precondition
    pub fn is_domain(&self) -> bool {
        matches!(self, SizingError::DomainError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SizingError::InvalidInput { .. } => "INVALID_INPUT",
            SizingError::DomainError { .. } => "DOMAIN_ERROR",
            SizingError::FileError { .. } => "FILE_ERROR",
            SizingError::SerializationError { .. } => "SERIALIZATION_ERROR",
            SizingError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for SizingError {
    fn from(err: serde_json::Error) -> Self {
        SizingError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SizingError::invalid_input("drum_radius_m", "-1.2", "Drum radius must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: SizingError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SizingError::domain("rms", "empty").error_code(), "DOMAIN_ERROR");
        assert_eq!(SizingError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert!(SizingError::invalid_input("x", "0", "bad").is_validation());
        assert!(!SizingError::domain("x", "bad").is_validation());
    }

    #[test]
    fn test_message_names_field() {
        let error = SizingError::invalid_input("safety_factor", "0.9", "Safety factor must exceed 1");
        assert!(error.to_string().contains("safety_factor"));
    }
}
