//! Scenario Comparator
//!
//! Differences between a baseline scenario (A) and a comparison scenario (B),
//! always expressed as `B - A`. Deterministic: no clock, no randomness.

use rust_decimal::prelude::*;
use shared::models::{Position, Scenario, ScenarioComparison, ScenarioSummary, default_catalog, find_position};
use std::collections::{BTreeMap, BTreeSet};

use crate::core::EngineConfig;
use crate::utils::math::{safe_div, to_decimal, to_f64};

/// Highlight emitted when no difference crosses a threshold
pub const NO_SIGNIFICANT_DIFFERENCES: &str = "No significant differences";

/// Compare two scenarios with the default catalog and thresholds
pub fn compare_scenarios(base: &Scenario, compare: &Scenario) -> ScenarioComparison {
    compare_scenarios_with(base, compare, &default_catalog(), &EngineConfig::default())
}

/// Compare two scenarios
///
/// Position names in highlights come from `positions`; IDs missing from the
/// catalog are shown as-is.
pub fn compare_scenarios_with(
    base: &Scenario,
    compare: &Scenario,
    positions: &[Position],
    config: &EngineConfig,
) -> ScenarioComparison {
    let a = &base.calculations;
    let b = &compare.calculations;

    let staff_diff = i64::from(b.total_staff) - i64::from(a.total_staff);
    let cost_diff = to_f64(to_decimal(b.labor_cost) - to_decimal(a.labor_cost));
    let labor_percentage_diff =
        to_f64(to_decimal(b.labor_percentage) - to_decimal(a.labor_percentage));

    let staffing_difference = staffing_difference(base, compare);

    let hours = Decimal::from(config.hours_per_staff_month);
    let efficiency_a = revenue_per_staff_hour(a.monthly_revenue, a.total_staff, hours);
    let efficiency_b = revenue_per_staff_hour(b.monthly_revenue, b.total_staff, hours);
    let efficiency_difference = to_f64(efficiency_b - efficiency_a);

    let mut highlights = Vec::new();
    let thresholds = &config.thresholds;

    if staff_diff.unsigned_abs() >= u64::from(thresholds.staff) && staff_diff != 0 {
        highlights.push(format!(
            "Total staff: {} → {} ({})",
            a.total_staff,
            b.total_staff,
            signed_int(staff_diff)
        ));
        for (position_id, diff) in &staffing_difference {
            let name = find_position(positions, position_id)
                .map(|p| p.name.as_str())
                .unwrap_or(position_id);
            highlights.push(format!(
                "{}: {} → {} ({})",
                name,
                base.required_count(position_id),
                compare.required_count(position_id),
                signed_int(*diff)
            ));
        }
    }

    if exceeds(labor_percentage_diff, thresholds.labor_percentage) {
        highlights.push(format!(
            "Labor cost %: {:.2}% → {:.2}% ({} pts)",
            a.labor_percentage,
            b.labor_percentage,
            signed_float(labor_percentage_diff)
        ));
    }

    if exceeds(efficiency_difference, thresholds.efficiency) {
        highlights.push(format!(
            "Revenue per labor hour: {:.2} → {:.2} ({})",
            to_f64(efficiency_a),
            to_f64(efficiency_b),
            signed_float(efficiency_difference)
        ));
    }

    if highlights.is_empty() {
        highlights.push(NO_SIGNIFICANT_DIFFERENCES.to_string());
    }

    let recommendation = recommendation(efficiency_difference, labor_percentage_diff).to_string();

    tracing::debug!(
        target: "calc",
        base = %base.id,
        compare = %compare.id,
        staff_diff,
        cost_diff,
        efficiency_difference,
        "Scenarios compared"
    );

    ScenarioComparison {
        base_scenario_id: base.id.clone(),
        compare_scenario_id: compare.id.clone(),
        staff_diff,
        cost_diff,
        labor_percentage_diff,
        staffing_difference,
        efficiency_difference,
        base: summary(base),
        compare: summary(compare),
        highlights,
        recommendation,
    }
}

/// Per-position headcount `B - A` over the union of positions; zero entries are dropped
pub fn staffing_difference(base: &Scenario, compare: &Scenario) -> BTreeMap<String, i64> {
    let ids: BTreeSet<&str> = base
        .staffing_requirements
        .iter()
        .chain(&compare.staffing_requirements)
        .map(|r| r.position_id.as_str())
        .collect();

    ids.into_iter()
        .filter_map(|id| {
            let diff = i64::from(compare.required_count(id)) - i64::from(base.required_count(id));
            (diff != 0).then(|| (id.to_string(), diff))
        })
        .collect()
}

/// Recommendation sentence from the direction of the efficiency and labor % changes
pub fn recommendation(efficiency_difference: f64, labor_percentage_diff: f64) -> &'static str {
    if efficiency_difference == 0.0 && labor_percentage_diff == 0.0 {
        "Both scenarios perform the same on efficiency and labor cost."
    } else if efficiency_difference > 0.0 && labor_percentage_diff < 0.0 {
        "The comparison scenario shows both improved efficiency and lower labor costs, making it the recommended choice."
    } else if efficiency_difference > 0.0 {
        "The comparison scenario shows higher efficiency but at a higher labor cost. This may be justified if service quality is a priority."
    } else if labor_percentage_diff < 0.0 {
        "The comparison scenario has lower labor costs but reduced efficiency. This may be appropriate for cost-cutting initiatives."
    } else {
        "The base scenario appears to be more optimal based on both efficiency and labor cost metrics."
    }
}

fn summary(scenario: &Scenario) -> ScenarioSummary {
    let calc = &scenario.calculations;
    ScenarioSummary {
        name: scenario.name.clone(),
        total_staff: calc.total_staff,
        labor_cost: calc.labor_cost,
        labor_percentage: calc.labor_percentage,
        foh_boh_ratio: calc.foh_boh_ratio,
    }
}

fn revenue_per_staff_hour(revenue: f64, staff: u32, hours: Decimal) -> Decimal {
    safe_div(to_decimal(revenue), Decimal::from(staff) * hours)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn exceeds(diff: f64, threshold: f64) -> bool {
    diff != 0.0 && diff.abs() >= threshold
}

fn signed_int(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

fn signed_float(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}
