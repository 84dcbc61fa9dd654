//! Scenario Comparison Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headline figures of one side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub total_staff: u32,
    pub labor_cost: f64,
    pub labor_percentage: f64,
    pub foh_boh_ratio: f64,
}

/// Difference between a baseline scenario (A) and a comparison scenario (B).
///
/// All diffs are `B - A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub base_scenario_id: String,
    pub compare_scenario_id: String,
    pub staff_diff: i64,
    pub cost_diff: f64,
    pub labor_percentage_diff: f64,
    /// Position ID -> headcount difference (non-zero entries only)
    pub staffing_difference: BTreeMap<String, i64>,
    /// Difference in revenue per labor hour
    pub efficiency_difference: f64,
    pub base: ScenarioSummary,
    pub compare: ScenarioSummary,
    pub highlights: Vec<String>,
    pub recommendation: String,
}
