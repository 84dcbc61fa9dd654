//! Calculation engine
//!
//! Closed-form, deterministic calculators. No I/O; every ratio goes through
//! [`crate::utils::math::safe_div`].
//!
//! # Pipeline
//!
//! ```text
//! SpaceParameters ──► seating capacity ──► StaffDetail ──► labor cost ─┐
//!                                   │                                  ├─► derived metrics
//! Revenue/Operational ──► turns ──► revenue projection ────────────────┘
//! ```

pub mod cache;
pub mod comparison;
pub mod cost;
pub mod efficiency;
pub mod optimization;
pub mod peak;
pub mod processing;
pub mod profit_loss;
pub mod revenue;
pub mod staffing;
pub mod what_if;

pub use cache::{CacheStats, CalculationCache, calculation_key};
pub use comparison::{compare_scenarios, compare_scenarios_with};
pub use cost::{
    DerivedInputs, DerivedMetrics, Headcount, LaborCost, OneTimeCosts, calculate_derived_metrics,
    calculate_labor_cost, calculate_one_time_costs, is_front_of_house, split_headcount,
};
pub use efficiency::{EfficiencyReport, efficiency_report};
pub use optimization::{
    OptimizationConstraints, PositionChange, StaffingOptimization, optimize_staffing,
};
pub use peak::{HourlyCovers, PeakHourAnalysis, analyze_peak_hours};
pub use processing::{ProcessedParameters, apply_processed, process_parameters, recalculate};
pub use profit_loss::{ProfitLossStatement, calculate_profit_loss};
pub use revenue::{
    MonthlyRevenue, RevenueInputs, RevenueProjection, calculate_daily_covers,
    calculate_monthly_revenue_series, calculate_turns_per_day, project_revenue,
};
pub use staffing::{
    calculate_foh_area, calculate_seating_capacity, calculate_staffing, staffing_requirements,
};
pub use what_if::{WhatIfAdjustments, WhatIfResult, analyze_what_if};
