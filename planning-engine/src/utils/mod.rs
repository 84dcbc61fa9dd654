//! Utility module - logging, numeric helpers, validation

pub mod logger;
pub mod math;
pub mod validation;

pub use logger::{cleanup_old_logs, init_logger, init_logger_with_file};
pub use math::{safe_div, safe_ratio, to_decimal, to_f64};
