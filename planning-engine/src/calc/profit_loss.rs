//! Profit and loss
//!
//! Monthly P&L of a scenario: labor cost from the staffing calculation,
//! the other operating costs as fixed percentages of revenue.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::ScenarioCalculations;

use crate::core::ProfitLossPolicy;
use crate::utils::math::{safe_div, to_decimal, to_f64};

/// Monthly profit and loss statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossStatement {
    pub revenue: f64,
    pub labor_cost: f64,
    pub food_cost: f64,
    pub rent_cost: f64,
    pub utilities_cost: f64,
    pub marketing_cost: f64,
    pub other_cost: f64,
    pub total_costs: f64,
    pub profit: f64,
    /// Profit as a percentage of revenue, 0 when there is no revenue
    pub profit_margin: f64,
    pub insights: Vec<String>,
}

impl ProfitLossStatement {
    pub fn is_profitable(&self) -> bool {
        self.profit > 0.0
    }
}

/// Monthly P&L from a scenario's revenue and labor cost
pub fn calculate_profit_loss(
    calculations: &ScenarioCalculations,
    policy: &ProfitLossPolicy,
) -> ProfitLossStatement {
    let hundred = Decimal::ONE_HUNDRED;
    let revenue = to_decimal(calculations.monthly_revenue);
    let share = |percentage: f64| revenue * to_decimal(percentage) / hundred;

    let lines = [
        ("labor cost", to_decimal(calculations.labor_cost)),
        ("food cost", share(policy.food_cost_percentage)),
        ("rent", share(policy.rent_percentage)),
        ("utilities", share(policy.utilities_percentage)),
        ("marketing", share(policy.marketing_percentage)),
        ("other costs", share(policy.other_percentage)),
    ];
    let total: Decimal = lines.iter().map(|(_, amount)| *amount).sum();
    let profit = revenue - total;
    let margin = safe_div(profit, revenue) * hundred;

    let mut insights = Vec::new();
    let margin_f = to_f64(margin);
    if margin_f < policy.minimum_margin {
        insights.push(format!(
            "Profit margin ({margin_f:.2}%) is below minimum target ({:.2}%)",
            policy.minimum_margin
        ));
    } else if margin_f > policy.target_margin {
        insights.push(format!(
            "Strong profit margin ({margin_f:.2}%) exceeds target ({:.2}%)",
            policy.target_margin
        ));
    }
    for (label, amount) in lines {
        let share_of_costs = to_f64(safe_div(amount, total) * hundred);
        if share_of_costs > policy.high_cost_share {
            insights.push(format!("High {label} ({share_of_costs:.2}% of total costs)"));
        }
    }

    let [labor, food, rent, utilities, marketing, other] = lines.map(|(_, amount)| to_f64(amount));
    let statement = ProfitLossStatement {
        revenue: to_f64(revenue),
        labor_cost: labor,
        food_cost: food,
        rent_cost: rent,
        utilities_cost: utilities,
        marketing_cost: marketing,
        other_cost: other,
        total_costs: to_f64(total),
        profit: to_f64(profit),
        profit_margin: margin_f,
        insights,
    };

    tracing::debug!(
        target: "calc",
        revenue = statement.revenue,
        profit = statement.profit,
        profit_margin = statement.profit_margin,
        "Profit and loss calculated"
    );
    statement
}
