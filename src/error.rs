//! Error types for usage-pulse.
//!
//! The crate uses a small hierarchical error system:
//! - `UsagePulseError` is the top-level error returned by all public APIs
//! - `ValidationError` provides detail for configuration problems
//!
//! Aggregation itself never fails: unclassifiable records are skipped, not
//! surfaced. Errors exist only at the parsing and configuration surfaces.
//!
//! # Error Handling Pattern
//! ```rust,ignore
//! use usagepulse::{parse_records, Result, RollupAggregator, RollupConfig, RollupScope};
//!
//! fn example(payload: &str) -> Result<()> {
//!     let records = parse_records(payload)?;
//!     let aggregator = RollupAggregator::new(RollupConfig::default())?;
//!     let report = aggregator.aggregate(&records, &RollupScope::Company);
//!     // ... hand report to the view layer ...
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias for usage-pulse operations.
pub type Result<T> = std::result::Result<T, UsagePulseError>;

/// Top-level error enum for all usage-pulse operations.
///
/// This is the only error type returned by public APIs.
/// Use pattern matching to handle specific error cases.
#[derive(Debug, Error)]
pub enum UsagePulseError {
    /// The upstream payload is not valid JSON of the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload parsed as JSON but was not the expected container
    /// (e.g. an object where an array of records was required).
    #[error("Unexpected payload shape: {reason}")]
    PayloadShape {
        /// Description of what the payload looked like instead.
        reason: String,
    },

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of what's wrong with the configuration.
        reason: String,
    },
}

impl UsagePulseError {
    /// Creates a configuration error with the given reason.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Creates a payload-shape error with the given reason.
    pub fn payload_shape(reason: impl Into<String>) -> Self {
        Self::PayloadShape {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a parse or payload-shape error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::PayloadShape { .. })
    }

    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

/// Validation errors for input data.
///
/// These errors indicate problems with data provided by the caller,
/// currently only classification vocabularies in [`RollupConfig`](crate::RollupConfig).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A field has an invalid value.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Name of the invalid field.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },

    /// A required field is missing or empty.
    #[error("Required field missing: {field}")]
    RequiredField {
        /// Name of the missing field.
        field: String,
    },
}

impl ValidationError {
    /// Creates an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a required field error.
    pub fn required_field(field: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UsagePulseError::config("empty access vocabulary");
        assert_eq!(
            err.to_string(),
            "Configuration error: empty access vocabulary"
        );
    }

    #[test]
    fn test_payload_shape_display() {
        let err = UsagePulseError::payload_shape("expected array, got object");
        assert_eq!(
            err.to_string(),
            "Unexpected payload shape: expected array, got object"
        );
        assert!(err.is_parse());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::invalid_field("access_types", "contains empty entry");
        assert_eq!(
            err.to_string(),
            "Invalid field 'access_types': contains empty entry"
        );
    }

    #[test]
    fn test_required_field_display() {
        let err = ValidationError::required_field("hired_types");
        assert_eq!(err.to_string(), "Required field missing: hired_types");
    }

    #[test]
    fn test_is_validation() {
        let err: UsagePulseError = ValidationError::required_field("access_types").into();
        assert!(err.is_validation());
        assert!(!err.is_parse());
        assert!(!err.is_config());
    }

    #[test]
    fn test_parse_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: UsagePulseError = bad.unwrap_err().into();
        assert!(err.is_parse());
    }

    #[test]
    fn test_error_conversion_chain() {
        // Simulate a validation error propagating up
        fn inner() -> Result<()> {
            Err(ValidationError::required_field("access_types"))?
        }

        let result = inner();
        assert!(result.is_err());
        assert!(result.unwrap_err().is_validation());
    }
}
