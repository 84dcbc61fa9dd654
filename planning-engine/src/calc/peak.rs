//! Peak-hour analysis
//!
//! Spreads daily covers over the opening hours using the scenario's peak
//! distribution and sizes the floor and kitchen for the peak.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{ParameterSet, ScenarioCalculations};

use crate::utils::math::{ceil_count, to_decimal, to_f64};

/// Covers expected in one hour of the day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyCovers {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Share of daily covers (0-1)
    pub share: f64,
    pub covers: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakHourAnalysis {
    pub hourly: Vec<HourlyCovers>,
    /// Earliest hour with the largest share; `None` without a distribution
    pub busiest_hour: Option<u8>,
    pub peak_covers: f64,
    /// Sum of all shares; below 1 means part of the day is unaccounted for
    pub distribution_total: f64,
    pub peak_foh_staff: u32,
    pub peak_boh_staff: u32,
}

/// Hourly covers and the peak staffing requirement
///
/// Peak staffing is `ceil(base × peak_hour_factor)` for each side of the house.
pub fn analyze_peak_hours(
    params: &ParameterSet,
    calculations: &ScenarioCalculations,
) -> PeakHourAnalysis {
    let daily = Decimal::from(calculations.daily_covers);

    let hourly: Vec<HourlyCovers> = params
        .operational
        .peak_hours_distribution
        .iter()
        .map(|(hour, share)| HourlyCovers {
            hour: *hour,
            share: *share,
            covers: to_f64(daily * to_decimal(*share)),
        })
        .collect();

    // Ties go to the earliest hour
    let busiest = hourly.iter().fold(None::<&HourlyCovers>, |best, h| match best {
        Some(b) if b.share >= h.share => Some(b),
        _ => Some(h),
    });

    let distribution_total: Decimal = hourly.iter().map(|h| to_decimal(h.share)).sum();
    let factor = to_decimal(params.revenue.peak_hour_factor);

    PeakHourAnalysis {
        busiest_hour: busiest.map(|h| h.hour),
        peak_covers: busiest.map(|h| h.covers).unwrap_or(0.0),
        distribution_total: to_f64(distribution_total),
        peak_foh_staff: ceil_count(Decimal::from(calculations.total_foh) * factor),
        peak_boh_staff: ceil_count(Decimal::from(calculations.total_boh) * factor),
        hourly,
    }
}
