//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Parameter errors
/// - 2xxx: Scenario errors
/// - 9xxx and anything unassigned: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Parameter errors (1xxx)
    Parameter,
    /// Scenario errors (2xxx)
    Scenario,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Parameter,
            2000..3000 => Self::Scenario,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Parameter => "parameter",
            Self::Scenario => "scenario",
            Self::System => "system",
        }
    }

    /// Whether errors of this category are caused by caller input
    /// and should be surfaced to the planner as-is.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::System)
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Parameter);
        assert_eq!(ErrorCategory::from_code(2201), ErrorCategory::Scenario);
        assert_eq!(ErrorCategory::from_code(5000), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::InvalidAreaPerCover.category(),
            ErrorCategory::Parameter
        );
        assert_eq!(ErrorCode::ScenarioNotFound.category(), ErrorCategory::Scenario);
        assert_eq!(ErrorCode::ConfigError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_user_facing() {
        assert!(ErrorCategory::Parameter.is_user_facing());
        assert!(!ErrorCategory::System.is_user_facing());
        assert_eq!(ErrorCategory::Scenario.name(), "scenario");
    }
}
