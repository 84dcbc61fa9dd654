//! Staffing optimization
//!
//! Trims a buffer off every staffed position, clamps each position to the
//! policy's per-position bounds, then enforces optional FOH/BOH caps by
//! taking people from the largest positions first. Never adds staff.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{Position, StaffDetail, StaffRole};

use crate::calc::cost::{Headcount, calculate_labor_cost, is_front_of_house, split_headcount};
use crate::core::OptimizationPolicy;
use crate::utils::math::{ceil_count, safe_div, to_decimal, to_f64};

/// Caller caps on each side of the house
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationConstraints {
    pub max_foh_staff: Option<u32>,
    pub max_boh_staff: Option<u32>,
}

/// One position whose headcount changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionChange {
    pub position_id: String,
    pub current: u32,
    pub optimized: u32,
}

/// Current vs optimized staffing and what it saves per month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingOptimization {
    pub current: StaffDetail,
    pub optimized: StaffDetail,
    pub changes: Vec<PositionChange>,
    pub current_headcount: Headcount,
    pub optimized_headcount: Headcount,
    pub current_labor_cost: f64,
    pub optimized_labor_cost: f64,
    pub cost_savings: f64,
    /// Savings as a percentage of the current labor cost
    pub savings_percentage: f64,
    pub insights: Vec<String>,
}

/// Optimize a staff detail under the policy and the caller's caps
pub fn optimize_staffing(
    current: &StaffDetail,
    positions: &[Position],
    policy: &OptimizationPolicy,
    constraints: &OptimizationConstraints,
) -> StaffingOptimization {
    let keep = Decimal::ONE - to_decimal(policy.buffer_percentage) / Decimal::ONE_HUNDRED;

    let mut optimized: StaffDetail = current
        .iter()
        .map(|(role, count)| {
            if count == 0 {
                return (role, 0);
            }
            let trimmed = ceil_count(Decimal::from(count) * keep)
                .max(floor_for(count, policy))
                .min(policy.max_per_position);
            (role, trimmed.min(count))
        })
        .collect();

    let mut insights = Vec::new();
    for (front, cap, side) in [
        (true, constraints.max_foh_staff, "FOH"),
        (false, constraints.max_boh_staff, "BOH"),
    ] {
        let Some(cap) = cap else { continue };
        let reached = enforce_side_cap(&mut optimized, current, positions, policy, front, cap);
        if reached {
            insights.push(format!(
                "{side} staffing at maximum limit. Consider cross-training to improve flexibility."
            ));
        } else {
            insights.push(format!(
                "{side} staffing cannot be reduced to {cap} without going below {} per position.",
                policy.min_per_position
            ));
        }
    }

    let current_headcount = split_headcount(current, positions);
    let optimized_headcount = split_headcount(&optimized, positions);
    let current_cost = to_decimal(calculate_labor_cost(current, positions).labor_cost);
    let optimized_cost = to_decimal(calculate_labor_cost(&optimized, positions).labor_cost);
    let savings = current_cost - optimized_cost;
    let savings_percentage = safe_div(savings, current_cost) * Decimal::ONE_HUNDRED;

    let reductions = [
        (
            "FOH",
            current_headcount.total_foh,
            optimized_headcount.total_foh,
            "Consider cross-training to maintain service quality.",
        ),
        (
            "BOH",
            current_headcount.total_boh,
            optimized_headcount.total_boh,
            "Consider prep optimization to maintain kitchen efficiency.",
        ),
    ];
    for (side, before, after, advice) in reductions {
        let reduction = to_f64(safe_div(
            Decimal::from(before.saturating_sub(after)),
            Decimal::from(before),
        ) * Decimal::ONE_HUNDRED);
        if reduction > policy.significant_reduction {
            insights.push(format!(
                "Significant {side} staff reduction ({reduction:.2}%). {advice}"
            ));
        }
    }
    if optimized_headcount.total() < current_headcount.total() {
        insights.push(format!(
            "Reduce total staff from {} to {}",
            current_headcount.total(),
            optimized_headcount.total()
        ));
    }
    if savings > Decimal::ZERO {
        insights.push(format!(
            "Potential labor cost savings of {:.2} per month ({:.2}% of labor cost)",
            to_f64(savings),
            to_f64(savings_percentage)
        ));
    }

    let changes = current
        .iter()
        .filter_map(|(role, count)| {
            let new_count = optimized.get(role);
            (new_count != count).then(|| PositionChange {
                position_id: role.position_id().to_string(),
                current: count,
                optimized: new_count,
            })
        })
        .collect();

    let result = StaffingOptimization {
        current: current.clone(),
        optimized,
        changes,
        current_headcount,
        optimized_headcount,
        current_labor_cost: to_f64(current_cost),
        optimized_labor_cost: to_f64(optimized_cost),
        cost_savings: to_f64(savings),
        savings_percentage: to_f64(savings_percentage),
        insights,
    };

    tracing::debug!(
        target: "calc",
        current_staff = result.current_headcount.total(),
        optimized_staff = result.optimized_headcount.total(),
        cost_savings = result.cost_savings,
        "Staffing optimized"
    );
    result
}

/// Lowest count a staffed position may be trimmed to
fn floor_for(current: u32, policy: &OptimizationPolicy) -> u32 {
    policy.min_per_position.min(current)
}

/// Take people from the largest positions on one side until it fits `cap`.
/// Returns false when the per-position floors make the cap unreachable.
fn enforce_side_cap(
    optimized: &mut StaffDetail,
    current: &StaffDetail,
    positions: &[Position],
    policy: &OptimizationPolicy,
    front: bool,
    cap: u32,
) -> bool {
    let side: Vec<StaffRole> = StaffRole::ALL
        .into_iter()
        .filter(|role| is_front_of_house(*role, positions) == front)
        .collect();

    loop {
        let total: u32 = side.iter().map(|role| optimized.get(*role)).sum();
        if total <= cap {
            return true;
        }
        // Largest first; ties go to the earlier role
        let candidate = side
            .iter()
            .copied()
            .filter(|role| optimized.get(*role) > floor_for(current.get(*role), policy))
            .max_by(|a, b| {
                optimized
                    .get(*a)
                    .cmp(&optimized.get(*b))
                    .then_with(|| b.cmp(a))
            });
        match candidate {
            Some(role) => optimized.set(role, optimized.get(role) - 1),
            None => return false,
        }
    }
}
