//! Application error type

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages, suitable for showing to a planner
/// - Optional structured details (offending field, allowed values, ...)
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a validation error for a single field
    pub fn invalid_field(code: ErrorCode, field: &str, msg: impl Into<String>) -> Self {
        Self::with_message(code, msg).with_detail("field", field)
    }

    /// Create a scenario not found error
    pub fn scenario_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(ErrorCode::ScenarioNotFound, format!("Scenario {} not found", id))
            .with_detail("scenario_id", id)
    }

    /// Create a position not found error
    pub fn position_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(
            ErrorCode::PositionNotFound,
            format!("Position {} not found in catalog", id),
        )
        .with_detail("position_id", id)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }

    /// Whether this error should be shown to the planner verbatim
    pub fn is_user_facing(&self) -> bool {
        self.code.category().is_user_facing()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_message(ErrorCode::SerializationError, err.to_string())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "total_area")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "total_area");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_invalid_field() {
        let err = AppError::invalid_field(
            ErrorCode::InvalidFraction,
            "empty_seats_provision",
            "empty_seats_provision must be between 0 and 1, got 1.5",
        );
        assert_eq!(err.code, ErrorCode::InvalidFraction);
        assert!(err.is_user_facing());
        assert_eq!(
            err.details.unwrap().get("field").unwrap(),
            "empty_seats_provision"
        );
    }

    #[test]
    fn test_scenario_not_found() {
        let err = AppError::scenario_not_found("abc");
        assert_eq!(err.code, ErrorCode::ScenarioNotFound);
        assert_eq!(format!("{}", err), "Scenario abc not found");
    }

    #[test]
    fn test_config_is_not_user_facing() {
        assert!(!AppError::config("bad env").is_user_facing());
    }

    #[test]
    fn test_position_not_found() {
        let err = AppError::position_not_found("pos-010");
        assert_eq!(err.code, ErrorCode::PositionNotFound);
        assert!(err.is_user_facing());
        assert_eq!(err.details.unwrap().get("position_id").unwrap(), "pos-010");
    }

    #[test]
    fn test_from_serde_error() {
        let err: AppError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }
}
