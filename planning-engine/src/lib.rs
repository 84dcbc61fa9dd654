//! Planning Engine - workforce planning for multi-outlet F&B operations
//!
//! # Overview
//!
//! Turns an outlet's space, service, revenue and operational parameters into
//! seating capacity, staffing per position, labor cost, revenue projections
//! and the ratios derived from them, and compares scenarios.
//!
//! - **Calculators** (`calc`): staffing, revenue, cost, comparison, what-if,
//!   peak hours, efficiency, profit and loss, staffing optimization,
//!   calculation cache
//! - **Scenario book** (`scenarios`): in-memory create / duplicate / update / delete
//! - **Configuration** (`core`): `EngineConfig` and its lookup tables
//!
//! # Module layout
//!
//! ```text
//! planning-engine/src/
//! ├── core/          # Configuration
//! ├── calc/          # Calculators
//! ├── scenarios/     # Scenario book
//! └── utils/         # Logging, numeric helpers, validation
//! ```

pub mod calc;
pub mod core;
pub mod scenarios;
pub mod utils;

// Re-export public types
pub use calc::{
    calculate_derived_metrics, calculate_labor_cost, calculate_monthly_revenue_series,
    calculate_profit_loss, calculate_seating_capacity, calculate_staffing, compare_scenarios,
    optimize_staffing, process_parameters, recalculate,
};
pub use core::{EngineConfig, LogConfig, RoundingGranularity};
pub use scenarios::ScenarioBook;

// Re-export unified error types from shared
pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from `LOG_LEVEL`, `LOG_JSON` and `LOG_DIR`
pub fn setup_environment() -> anyhow::Result<LogConfig> {
    dotenv::dotenv().ok();

    let log = LogConfig::from_env();
    init_logger_with_file(&log.level, log.json, log.dir.as_deref())?;
    Ok(log)
}

pub fn print_banner() {
    println!(
        r#"
    ____  __                  _
   / __ \/ /___ _____  ____  (_)___  ____ _
  / /_/ / / __ `/ __ \/ __ \/ / __ \/ __ `/
 / ____/ / /_/ / / / / / / / / / / / /_/ /
/_/   /_/\__,_/_/ /_/_/ /_/_/_/ /_/\__, /
                                  /____/
    "#
    );
}
