//! What-if analysis
//!
//! Scales a scenario's labor cost and revenue by percentage adjustments
//! (100 = unchanged) without touching its parameters.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::ScenarioCalculations;
use shared::{AppError, AppResult, ErrorCode};

use crate::utils::math::{safe_div, to_decimal, to_f64};

/// Largest accepted adjustment, in percent
pub const MAX_ADJUSTMENT: f64 = 300.0;

/// Percentage adjustments, 100 = unchanged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhatIfAdjustments {
    pub staffing_level: f64,
    pub average_wage: f64,
    pub customer_volume: f64,
    pub average_check: f64,
}

impl Default for WhatIfAdjustments {
    fn default() -> Self {
        Self {
            staffing_level: 100.0,
            average_wage: 100.0,
            customer_volume: 100.0,
            average_check: 100.0,
        }
    }
}

impl WhatIfAdjustments {
    /// Every adjustment must lie in `0..=300` percent
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("staffing_level", self.staffing_level),
            ("average_wage", self.average_wage),
            ("customer_volume", self.customer_volume),
            ("average_check", self.average_check),
        ];
        for (field, value) in fields {
            if !(0.0..=MAX_ADJUSTMENT).contains(&value) {
                return Err(AppError::invalid_field(
                    ErrorCode::InvalidAdjustment,
                    field,
                    format!("{field} must be between 0 and {MAX_ADJUSTMENT}%, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// Outcome of a what-if run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhatIfResult {
    pub base_labor_cost: f64,
    pub base_revenue: f64,
    pub adjusted_labor_cost: f64,
    pub adjusted_revenue: f64,
    pub labor_cost_diff: f64,
    /// Revenue change in percent, 0 when the base revenue is 0
    pub revenue_change_percentage: f64,
    pub base_labor_percentage: f64,
    pub new_labor_percentage: f64,
    /// Change in (revenue - labor cost)
    pub profit_impact: f64,
}

impl WhatIfResult {
    /// Labor cost goes down while revenue holds or grows
    pub fn is_positive(&self) -> bool {
        self.labor_cost_diff < 0.0 && self.adjusted_revenue >= self.base_revenue
    }
}

/// Apply adjustments to a scenario's monthly labor cost and revenue
pub fn analyze_what_if(
    calculations: &ScenarioCalculations,
    adjustments: &WhatIfAdjustments,
) -> AppResult<WhatIfResult> {
    adjustments.validate()?;

    let hundred = Decimal::ONE_HUNDRED;
    let base_labor = to_decimal(calculations.labor_cost);
    let base_revenue = to_decimal(calculations.monthly_revenue);

    let adjusted_labor = base_labor * to_decimal(adjustments.staffing_level) / hundred
        * to_decimal(adjustments.average_wage)
        / hundred;
    let adjusted_revenue = base_revenue * to_decimal(adjustments.customer_volume) / hundred
        * to_decimal(adjustments.average_check)
        / hundred;

    let revenue_change = if base_revenue.is_zero() {
        Decimal::ZERO
    } else {
        (adjusted_revenue / base_revenue - Decimal::ONE) * hundred
    };
    let profit_impact = (adjusted_revenue - adjusted_labor) - (base_revenue - base_labor);

    let result = WhatIfResult {
        base_labor_cost: to_f64(base_labor),
        base_revenue: to_f64(base_revenue),
        adjusted_labor_cost: to_f64(adjusted_labor),
        adjusted_revenue: to_f64(adjusted_revenue),
        labor_cost_diff: to_f64(adjusted_labor - base_labor),
        revenue_change_percentage: to_f64(revenue_change),
        base_labor_percentage: to_f64(safe_div(base_labor, base_revenue) * hundred),
        new_labor_percentage: to_f64(safe_div(adjusted_labor, adjusted_revenue) * hundred),
        profit_impact: to_f64(profit_impact),
    };

    tracing::debug!(
        target: "calc",
        adjusted_labor_cost = result.adjusted_labor_cost,
        adjusted_revenue = result.adjusted_revenue,
        profit_impact = result.profit_impact,
        "What-if analyzed"
    );
    Ok(result)
}
