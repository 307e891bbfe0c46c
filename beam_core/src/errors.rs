//! # Error Types
//!
//! Structured error types for beam_core. Every failure the engine can report
//! is a named, serializable variant with enough context to handle it
//! programmatically; nothing in this crate prints or logs on failure - how a
//! failure is rendered is the presentation layer's decision.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_length(length: f64) -> BeamResult<()> {
//!     if length <= 0.0 {
//!         return Err(BeamError::invalid_input(
//!             "length",
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam analysis operations.
///
/// Each variant provides specific context about what went wrong. All variants
/// are recoverable: the caller can adjust the offending input and re-run the
/// analysis.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// An input value is invalid (out of range, inconsistent, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A support layout the statically determinate solver cannot handle
    #[error("Unsolvable support configuration: {reason}")]
    UnsolvableSupportConfiguration { reason: String },

    /// Two supports share one position, making the equilibrium system singular
    #[error("Singular support configuration: both supports at position {position}")]
    SingularSupportConfiguration { position: f64 },

    /// Zero supports, or more than two
    #[error("Unsupported support count: {count} (expected 1 or 2)")]
    UnsupportedSupportCount { count: usize },

    /// A distributed load whose span has zero length
    #[error("Degenerate distributed load at position {position}: span has zero length")]
    DegenerateDistributedLoad { position: f64 },

    /// A distributed load whose end intensities cancel exactly; its centroid
    /// is undefined and its contribution is defined as zero
    #[error(
        "Distributed load intensities cancel ({start_magnitude} and {end_magnitude}): \
         centroid is undefined"
    )]
    ZeroResultantNormalization {
        start_magnitude: f64,
        end_magnitude: f64,
    },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsolvableSupportConfiguration error
    pub fn unsolvable(reason: impl Into<String>) -> Self {
        BeamError::UnsolvableSupportConfiguration {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::UnsolvableSupportConfiguration { .. } => "UNSOLVABLE_SUPPORT_CONFIGURATION",
            BeamError::SingularSupportConfiguration { .. } => "SINGULAR_SUPPORT_CONFIGURATION",
            BeamError::UnsupportedSupportCount { .. } => "UNSUPPORTED_SUPPORT_COUNT",
            BeamError::DegenerateDistributedLoad { .. } => "DEGENERATE_DISTRIBUTED_LOAD",
            BeamError::ZeroResultantNormalization { .. } => "ZERO_RESULTANT_NORMALIZATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BeamError::invalid_input("length", "-5.0", "Beam length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: BeamError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            BeamError::unsolvable("test").error_code(),
            "UNSOLVABLE_SUPPORT_CONFIGURATION"
        );
        assert_eq!(
            BeamError::UnsupportedSupportCount { count: 3 }.error_code(),
            "UNSUPPORTED_SUPPORT_COUNT"
        );
    }

    #[test]
    fn test_error_display() {
        let error = BeamError::SingularSupportConfiguration { position: 0.0 };
        assert!(error.to_string().contains("position 0"));
    }
}
