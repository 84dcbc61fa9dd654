//! Unified error codes for the planning engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Parameter errors
//! - 2xxx: Scenario errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so a UI layer can map them
/// to localized messages without parsing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Parameters ====================
    /// Area per cover is not one of the allowed service-style values
    InvalidAreaPerCover = 1001,
    /// Covers per waiter is not one of the allowed values
    InvalidCoversPerWaiter = 1002,
    /// Runner to waiter ratio is not one of the allowed percentages
    InvalidRunnerRatio = 1003,
    /// Service style is not recognized
    InvalidServiceStyle = 1004,
    /// A fraction parameter is outside 0..=1
    InvalidFraction = 1005,
    /// A percentage parameter is outside its allowed range
    InvalidPercentage = 1006,
    /// Operating hours are malformed
    InvalidOperatingHours = 1007,

    // ==================== 2xxx: Scenario ====================
    /// Scenario not found
    ScenarioNotFound = 2001,
    /// Scenario name already exists for the outlet
    ScenarioNameExists = 2002,
    /// Position not found in the catalog
    PositionNotFound = 2101,
    /// What-if adjustment is out of range
    InvalidAdjustment = 2201,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
    /// Serialization error
    SerializationError = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this code represents success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Parameters
            ErrorCode::InvalidAreaPerCover => {
                "Area per cover must be one of 1.5, 1.67, 1.86, 2.05, 2.32"
            }
            ErrorCode::InvalidCoversPerWaiter => "Covers per waiter must be one of 12, 16, 20, 24",
            ErrorCode::InvalidRunnerRatio => "Runner to waiter ratio must be one of 25, 50, 75, 100",
            ErrorCode::InvalidServiceStyle => "Unknown service style",
            ErrorCode::InvalidFraction => "Value must be between 0 and 1",
            ErrorCode::InvalidPercentage => "Percentage is out of range",
            ErrorCode::InvalidOperatingHours => "Operating hours are invalid",

            // Scenario
            ErrorCode::ScenarioNotFound => "Scenario not found",
            ErrorCode::ScenarioNameExists => "Scenario name already exists",
            ErrorCode::PositionNotFound => "Position not found",
            ErrorCode::InvalidAdjustment => "What-if adjustment is out of range",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::SerializationError => "Serialization error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Parameters
            1001 => Ok(ErrorCode::InvalidAreaPerCover),
            1002 => Ok(ErrorCode::InvalidCoversPerWaiter),
            1003 => Ok(ErrorCode::InvalidRunnerRatio),
            1004 => Ok(ErrorCode::InvalidServiceStyle),
            1005 => Ok(ErrorCode::InvalidFraction),
            1006 => Ok(ErrorCode::InvalidPercentage),
            1007 => Ok(ErrorCode::InvalidOperatingHours),

            // Scenario
            2001 => Ok(ErrorCode::ScenarioNotFound),
            2002 => Ok(ErrorCode::ScenarioNameExists),
            2101 => Ok(ErrorCode::PositionNotFound),
            2201 => Ok(ErrorCode::InvalidAdjustment),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::SerializationError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::InvalidAreaPerCover.code(), 1001);
        assert_eq!(ErrorCode::ScenarioNotFound.code(), 2001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_roundtrip() {
        for code in [
            ErrorCode::Unknown,
            ErrorCode::InvalidRunnerRatio,
            ErrorCode::PositionNotFound,
            ErrorCode::ConfigError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::ScenarioNotFound).unwrap();
        assert_eq!(json, "2001");
        let code: ErrorCode = serde_json::from_str("1003").unwrap();
        assert_eq!(code, ErrorCode::InvalidRunnerRatio);
        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
    }
}
