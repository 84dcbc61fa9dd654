//! Shared types for the workforce planner
//!
//! Parameter groups, the position catalog, scenarios and their derived
//! calculations, comparison results, and the unified error type.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
