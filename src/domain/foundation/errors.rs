//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised while checking a value or a configuration for consistency.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("'{owner}' references unknown {kind} '{id}'")]
    UnknownReference {
        owner: String,
        kind: &'static str,
        id: String,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an error for a dangling identifier (flow -> question, entry point -> flow).
    pub fn unknown_reference(
        owner: impl Into<String>,
        kind: &'static str,
        id: impl Into<String>,
    ) -> Self {
        ValidationError::UnknownReference {
            owner: owner.into(),
            kind,
            id: id.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Configuration errors
    InvalidConfiguration,
    InvalidFlow,
    UnknownQuestion,

    // Catalog errors
    CatalogUnavailable,
    CatalogMalformed,

    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidConfiguration => "INVALID_CONFIGURATION",
            ErrorCode::InvalidFlow => "INVALID_FLOW",
            ErrorCode::UnknownQuestion => "UNKNOWN_QUESTION",
            ErrorCode::CatalogUnavailable => "CATALOG_UNAVAILABLE",
            ErrorCode::CatalogMalformed => "CATALOG_MALFORMED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates the error returned when a flow identifier is not configured.
    pub fn invalid_flow(flow_id: impl Into<String>) -> Self {
        let flow_id = flow_id.into();
        Self::new(
            ErrorCode::InvalidFlow,
            format!("Flow '{}' is not configured", flow_id),
        )
        .with_detail("flow_id", flow_id)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::InvalidConfiguration, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("flows.by-goal.questions");
        assert_eq!(
            format!("{}", err),
            "Field 'flows.by-goal.questions' cannot be empty"
        );
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("thresholds.ideal_results", 3, 15, 20);
        assert_eq!(
            format!("{}", err),
            "Field 'thresholds.ideal_results' must be between 3 and 15, got 20"
        );
    }

    #[test]
    fn validation_error_unknown_reference_names_owner_and_id() {
        let err = ValidationError::unknown_reference("flow 'by-goal'", "question", "colour");
        assert_eq!(
            format!("{}", err),
            "'flow 'by-goal'' references unknown question 'colour'"
        );
    }

    #[test]
    fn invalid_flow_carries_flow_id_detail() {
        let err = DomainError::invalid_flow("by-colour");
        assert_eq!(err.code, ErrorCode::InvalidFlow);
        assert_eq!(err.details.get("flow_id"), Some(&"by-colour".to_string()));
        assert_eq!(
            format!("{}", err),
            "[INVALID_FLOW] Flow 'by-colour' is not configured"
        );
    }

    #[test]
    fn validation_error_converts_to_invalid_configuration() {
        let err: DomainError = ValidationError::empty_field("questions").into();
        assert_eq!(err.code, ErrorCode::InvalidConfiguration);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::CatalogMalformed), "CATALOG_MALFORMED");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
