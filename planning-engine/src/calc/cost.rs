//! Cost Calculator
//!
//! Monthly labor cost split by side of the house, one-time hiring costs and
//! the ratios derived from them. Uses rust_decimal for the money math,
//! returns f64 rounded to 2 decimal places.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{Position, StaffDetail, StaffRole, find_position};

use crate::core::EngineConfig;
use crate::utils::math::{safe_div, to_decimal, to_f64};

/// Monthly labor cost
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LaborCost {
    /// FOH and management positions
    pub foh_cost: f64,
    pub boh_cost: f64,
    pub labor_cost: f64,
}

/// One-time costs of staffing up, kept apart from the monthly labor cost
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OneTimeCosts {
    pub training: f64,
    /// Recruitment amortized by each position's turnover rate
    pub recruitment: f64,
    pub meals: f64,
    pub total: f64,
}

/// Headcount split by side of the house
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headcount {
    pub total_foh: u32,
    pub total_boh: u32,
}

impl Headcount {
    pub fn total(&self) -> u32 {
        self.total_foh + self.total_boh
    }
}

/// Monthly cost of `count` people in a position
pub fn position_cost(count: u32, position: &Position) -> Decimal {
    Decimal::from(count)
        * (to_decimal(position.base_salary)
            + to_decimal(position.variable_pay)
            + to_decimal(position.benefits))
}

/// Iterate roles with their catalog position, skipping roles the catalog lacks
fn staffed_positions<'a>(
    detail: &'a StaffDetail,
    positions: &'a [Position],
) -> impl Iterator<Item = (StaffRole, u32, &'a Position)> + 'a {
    detail.iter().filter_map(move |(role, count)| {
        match find_position(positions, role.position_id()) {
            Some(position) => Some((role, count, position)),
            None => {
                if count > 0 {
                    tracing::debug!(
                        target: "calc",
                        position_id = role.position_id(),
                        count,
                        "Position missing from catalog, costed at 0"
                    );
                }
                None
            }
        }
    })
}

/// Monthly labor cost of a staff detail
///
/// Management counts on the FOH side. Roles whose position is missing from
/// the catalog contribute 0.
pub fn calculate_labor_cost(detail: &StaffDetail, positions: &[Position]) -> LaborCost {
    let mut foh = Decimal::ZERO;
    let mut boh = Decimal::ZERO;

    for (_, count, position) in staffed_positions(detail, positions) {
        let cost = position_cost(count, position);
        if position.category.is_front_of_house() {
            foh += cost;
        } else {
            boh += cost;
        }
    }

    LaborCost {
        foh_cost: to_f64(foh),
        boh_cost: to_f64(boh),
        labor_cost: to_f64(foh + boh),
    }
}

/// One-time training, recruitment and meal costs of a staff detail
pub fn calculate_one_time_costs(detail: &StaffDetail, positions: &[Position]) -> OneTimeCosts {
    let mut training = Decimal::ZERO;
    let mut recruitment = Decimal::ZERO;
    let mut meals = Decimal::ZERO;

    for (_, count, position) in staffed_positions(detail, positions) {
        let count = Decimal::from(count);
        training += count * to_decimal(position.training_cost);
        recruitment +=
            count * to_decimal(position.recruitment_cost) * to_decimal(position.turnover_rate);
        meals += count * to_decimal(position.meal_cost);
    }

    OneTimeCosts {
        training: to_f64(training),
        recruitment: to_f64(recruitment),
        meals: to_f64(meals),
        total: to_f64(training + recruitment + meals),
    }
}

/// FOH/BOH headcount
///
/// Side comes from the catalog category; roles missing from the catalog fall
/// back to kitchen = BOH so the split always sums to the total.
pub fn split_headcount(detail: &StaffDetail, positions: &[Position]) -> Headcount {
    detail
        .iter()
        .fold(Headcount::default(), |mut acc, (role, count)| {
            if is_front_of_house(role, positions) {
                acc.total_foh += count;
            } else {
                acc.total_boh += count;
            }
            acc
        })
}

/// Side of the house of a role, from its catalog category or, when the
/// catalog lacks it, kitchen = BOH
pub fn is_front_of_house(role: StaffRole, positions: &[Position]) -> bool {
    find_position(positions, role.position_id())
        .map(|p| p.category.is_front_of_house())
        .unwrap_or(!role.is_kitchen())
}

/// Inputs of [`calculate_derived_metrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedInputs {
    pub labor_cost: f64,
    pub monthly_revenue: f64,
    pub seating_capacity: u32,
    pub total_foh: u32,
    pub total_boh: u32,
    pub monthly_covers: f64,
}

/// Ratios derived from cost, revenue and headcount
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub labor_percentage: f64,
    pub cost_per_seat: f64,
    pub foh_boh_ratio: f64,
    pub covers_per_labor_hour: f64,
    pub revenue_per_labor_hour: f64,
}

/// Labor %, cost per seat, FOH/BOH ratio and per-labor-hour figures
///
/// Every ratio is 0 when its denominator is 0.
pub fn calculate_derived_metrics(inputs: &DerivedInputs, config: &EngineConfig) -> DerivedMetrics {
    let labor_cost = to_decimal(inputs.labor_cost);
    let revenue = to_decimal(inputs.monthly_revenue);
    let total_staff = Decimal::from(inputs.total_foh + inputs.total_boh);
    let labor_hours = total_staff * Decimal::from(config.hours_per_staff_month);

    let labor_percentage = safe_div(labor_cost, revenue) * Decimal::ONE_HUNDRED;
    let cost_per_seat = safe_div(
        safe_div(labor_cost, Decimal::from(inputs.seating_capacity)),
        Decimal::from(config.months_in_period),
    );

    DerivedMetrics {
        labor_percentage: to_f64(labor_percentage.max(Decimal::ZERO)),
        cost_per_seat: to_f64(cost_per_seat),
        foh_boh_ratio: to_f64(safe_div(
            Decimal::from(inputs.total_foh),
            Decimal::from(inputs.total_boh),
        )),
        covers_per_labor_hour: to_f64(safe_div(to_decimal(inputs.monthly_covers), labor_hours)),
        revenue_per_labor_hour: to_f64(safe_div(revenue, labor_hours)),
    }
}
