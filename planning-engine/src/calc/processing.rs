//! Scenario processing
//!
//! Runs the full pipeline (seating -> staffing -> cost -> revenue -> ratios)
//! for one parameter set. Pure; [`recalculate`] only adds the timestamp.

use chrono::Utc;
use rust_decimal::prelude::*;
use shared::models::{ParameterSet, Position, Scenario, ScenarioCalculations, StaffDetail, StaffingRequirement};

use crate::calc::cost::{DerivedInputs, calculate_derived_metrics, calculate_labor_cost, split_headcount};
use crate::calc::revenue::{calculate_daily_covers, calculate_turns_per_day, project_revenue, revenue_inputs};
use crate::calc::staffing::{calculate_foh_area, calculate_seating_capacity, staffing_for_capacity, staffing_requirements};
use crate::core::EngineConfig;
use crate::utils::math::{safe_div, to_f64};

/// Everything derived from a parameter set
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedParameters {
    pub staffing_requirements: Vec<StaffingRequirement>,
    pub calculations: ScenarioCalculations,
}

/// Derive staffing, costs, revenue and ratios from a parameter set
pub fn process_parameters(
    params: &ParameterSet,
    positions: &[Position],
    config: &EngineConfig,
) -> ProcessedParameters {
    let seating_capacity = calculate_seating_capacity(&params.space);
    let staff_detail: StaffDetail = staffing_for_capacity(seating_capacity, &params.service, &config.staffing);
    let requirements = staffing_requirements(&staff_detail, &params.service, &config.staffing);

    let headcount = split_headcount(&staff_detail, positions);
    let cost = calculate_labor_cost(&staff_detail, positions);

    let projection = project_revenue(
        &revenue_inputs(&params.space, &params.revenue, &params.operational),
        config,
    );
    let turns_per_day = calculate_turns_per_day(&params.revenue, &params.operational);
    let daily_covers = calculate_daily_covers(&params.space, &params.revenue, &params.operational);
    let monthly_covers = safe_div(
        Decimal::from(daily_covers) * Decimal::from(params.operational.operating_days),
        Decimal::from(12),
    );

    let metrics = calculate_derived_metrics(
        &DerivedInputs {
            labor_cost: cost.labor_cost,
            monthly_revenue: projection.base_monthly,
            seating_capacity,
            total_foh: headcount.total_foh,
            total_boh: headcount.total_boh,
            monthly_covers: to_f64(monthly_covers),
        },
        config,
    );

    tracing::debug!(
        target: "calc",
        seating_capacity,
        total_staff = headcount.total(),
        labor_cost = cost.labor_cost,
        labor_percentage = metrics.labor_percentage,
        "Parameters processed"
    );

    ProcessedParameters {
        staffing_requirements: requirements,
        calculations: ScenarioCalculations {
            total_staff: headcount.total(),
            total_foh: headcount.total_foh,
            total_boh: headcount.total_boh,
            foh_boh_ratio: metrics.foh_boh_ratio,
            staff_detail,
            seating_capacity,
            foh_area: calculate_foh_area(&params.space),
            labor_cost: cost.labor_cost,
            foh_cost: cost.foh_cost,
            boh_cost: cost.boh_cost,
            monthly_revenue: projection.base_monthly,
            annual_revenue: projection.annual_revenue,
            labor_percentage: metrics.labor_percentage,
            cost_per_seat: metrics.cost_per_seat,
            covers_per_labor_hour: metrics.covers_per_labor_hour,
            revenue_per_labor_hour: metrics.revenue_per_labor_hour,
            daily_covers,
            turns_per_day,
        },
    }
}

/// Recompute a scenario's requirements and calculations from its parameters
pub fn recalculate(scenario: &mut Scenario, positions: &[Position], config: &EngineConfig) {
    let processed = process_parameters(&scenario.parameters, positions, config);
    apply_processed(scenario, processed);
}

/// Store processed results on a scenario and stamp `updated_at`
pub fn apply_processed(scenario: &mut Scenario, processed: ProcessedParameters) {
    scenario.staffing_requirements = processed.staffing_requirements;
    scenario.calculations = processed.calculations;
    scenario.updated_at = Utc::now();

    tracing::info!(
        scenario_id = %scenario.id,
        total_staff = scenario.calculations.total_staff,
        "Scenario recalculated"
    );
}
