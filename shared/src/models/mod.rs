//! Data models
//!
//! Shared between the planning engine and any presentation layer.
//! Derived values live in [`ScenarioCalculations`] and are only ever
//! written by the engine.

pub mod comparison;
pub mod parameters;
pub mod position;
pub mod scenario;
pub mod service_style;
pub mod staff;

// Re-exports
pub use comparison::*;
pub use parameters::*;
pub use position::{Position, PositionCategory, default_catalog, find_position};
pub use scenario::*;
pub use service_style::*;
pub use staff::*;
