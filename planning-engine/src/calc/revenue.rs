//! Revenue Calculator
//!
//! Monthly revenue series and annual totals from seating capacity, table
//! turnover, occupancy and average check.
//!
//! ```text
//! base_monthly = seating × turnover × occupancy% / 100 × average_check × days_per_month
//! projected[m] = round(base_monthly × seasonality[m])
//! annual       = Σ projected[m]            (not base × 12)
//! ```

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{OperationalParameters, RevenueParameters, SpaceParameters};

use crate::calc::staffing::calculate_seating_capacity;
use crate::core::EngineConfig;
use crate::utils::math::{floor_count, safe_div, to_decimal, to_f64};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Inputs of a revenue projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueInputs {
    pub seating_capacity: u32,
    /// Table turns per day
    pub turnover_rate: f64,
    /// Percentage of seats occupied (0-100)
    pub occupancy_rate: f64,
    pub average_check: f64,
}

/// One month of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Calendar month (1-12)
    pub month: u32,
    pub label: String,
    pub baseline: f64,
    pub seasonal_factor: f64,
    pub projected: f64,
}

/// Twelve-month revenue projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueProjection {
    /// Base monthly revenue before seasonality and rounding
    pub base_monthly: f64,
    pub months: Vec<MonthlyRevenue>,
    pub annual_baseline: f64,
    pub annual_revenue: f64,
    /// Projected annual revenue vs baseline, in percent
    pub percentage_change: f64,
}

impl RevenueProjection {
    /// Projected values in calendar order
    pub fn series(&self) -> [f64; 12] {
        let mut series = [0.0; 12];
        for (slot, month) in series.iter_mut().zip(&self.months) {
            *slot = month.projected;
        }
        series
    }
}

/// Project twelve months of revenue
pub fn project_revenue(inputs: &RevenueInputs, config: &EngineConfig) -> RevenueProjection {
    let base = base_monthly_revenue(inputs, config);

    let mut annual = Decimal::ZERO;
    let months: Vec<MonthlyRevenue> = (1..=12u32)
        .map(|month| {
            let factor = config.seasonal_factor(month);
            let projected = config.rounding.apply(base * to_decimal(factor));
            annual += projected;
            MonthlyRevenue {
                month,
                label: MONTH_NAMES[(month - 1) as usize].to_string(),
                baseline: to_f64(base),
                seasonal_factor: factor,
                projected: to_f64(projected),
            }
        })
        .collect();

    let baseline = base * Decimal::from(12);
    let change = safe_div(annual - baseline, baseline) * Decimal::ONE_HUNDRED;

    tracing::debug!(
        target: "calc",
        seating = inputs.seating_capacity,
        base_monthly = %base,
        annual = %annual,
        "Revenue projected"
    );

    RevenueProjection {
        base_monthly: to_f64(base),
        months,
        annual_baseline: to_f64(baseline),
        annual_revenue: to_f64(annual),
        percentage_change: to_f64(change),
    }
}

fn base_monthly_revenue(inputs: &RevenueInputs, config: &EngineConfig) -> Decimal {
    Decimal::from(inputs.seating_capacity)
        * to_decimal(inputs.turnover_rate)
        * to_decimal(inputs.occupancy_rate)
        / Decimal::ONE_HUNDRED
        * to_decimal(inputs.average_check)
        * Decimal::from(config.days_per_month)
}

/// Average opening hours per day over all weekday and weekend entries
pub fn average_operating_hours(operational: &OperationalParameters) -> f64 {
    to_f64(average_hours(operational))
}

fn average_hours(operational: &OperationalParameters) -> Decimal {
    let days = operational.weekday_hours.len() + operational.weekend_hours.len();
    let total: Decimal = operational
        .weekday_hours
        .iter()
        .chain(&operational.weekend_hours)
        .map(|h| to_decimal(*h))
        .sum();
    safe_div(total, Decimal::from(days))
}

/// Whole table turns per day; 0 when the turn time is 0
pub fn calculate_turns_per_day(
    revenue: &RevenueParameters,
    operational: &OperationalParameters,
) -> u32 {
    let minutes = average_hours(operational) * Decimal::from(60);
    floor_count(safe_div(minutes, to_decimal(revenue.table_turn_time)))
}

/// Covers served per day after the empty-seat provision
pub fn calculate_daily_covers(
    space: &SpaceParameters,
    revenue: &RevenueParameters,
    operational: &OperationalParameters,
) -> u32 {
    let seating = Decimal::from(calculate_seating_capacity(space));
    let turns = Decimal::from(calculate_turns_per_day(revenue, operational));
    let occupied = Decimal::ONE - to_decimal(revenue.empty_seats_provision);
    floor_count(seating * turns * occupied)
}

/// Revenue inputs derived from scenario parameters
///
/// Turnover is the whole turns per day, occupancy is the share of seats not
/// held back by the empty-seat provision, the check is the average spend.
pub fn revenue_inputs(
    space: &SpaceParameters,
    revenue: &RevenueParameters,
    operational: &OperationalParameters,
) -> RevenueInputs {
    let occupancy = (Decimal::ONE - to_decimal(revenue.empty_seats_provision)) * Decimal::ONE_HUNDRED;
    RevenueInputs {
        seating_capacity: calculate_seating_capacity(space),
        turnover_rate: f64::from(calculate_turns_per_day(revenue, operational)),
        occupancy_rate: to_f64(occupancy),
        average_check: revenue.average_spend_per_guest,
    }
}

/// Twelve projected monthly revenues for a scenario's parameters
///
/// Seasonality is applied when `config.include_seasonality` is set.
pub fn calculate_monthly_revenue_series(
    space: &SpaceParameters,
    revenue: &RevenueParameters,
    operational: &OperationalParameters,
    config: &EngineConfig,
) -> [f64; 12] {
    project_revenue(&revenue_inputs(space, revenue, operational), config).series()
}
