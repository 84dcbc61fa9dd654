//! Service Style Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::parameters::ParameterSet;
use crate::error::{AppError, ErrorCode};

/// Service style of a brand/outlet
///
/// Drives the kitchen staffing lookups and the default parameter presets.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ServiceStyle {
    #[serde(rename = "Fast Casual")]
    FastCasual,
    #[serde(rename = "Casual Dining")]
    #[default]
    CasualDining,
    #[serde(rename = "Premium Dining")]
    PremiumDining,
}

impl ServiceStyle {
    pub const ALL: [ServiceStyle; 3] = [
        ServiceStyle::FastCasual,
        ServiceStyle::CasualDining,
        ServiceStyle::PremiumDining,
    ];

    /// Display name, identical to the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Self::FastCasual => "Fast Casual",
            Self::CasualDining => "Casual Dining",
            Self::PremiumDining => "Premium Dining",
        }
    }

    /// Starting parameters for this style
    pub fn default_parameters(&self) -> ParameterSet {
        ParameterSet::for_style(*self)
    }
}

impl fmt::Display for ServiceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceStyle {
    type Err = AppError;

    /// Accepts the display name or a short alias ("premium", "casual", "fast-casual")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "fast casual" => Ok(Self::FastCasual),
            "casual dining" | "casual" => Ok(Self::CasualDining),
            "premium dining" | "premium" => Ok(Self::PremiumDining),
            _ => Err(AppError::with_message(
                ErrorCode::InvalidServiceStyle,
                format!("Unknown service style '{}'", s),
            )
            .with_detail("value", s)),
        }
    }
}
