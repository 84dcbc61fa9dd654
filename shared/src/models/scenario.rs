//! Scenario Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parameters::ParameterSet;
use super::service_style::ServiceStyle;
use super::staff::StaffDetail;

/// Required headcount for one catalog position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingRequirement {
    pub position_id: String,
    pub count: u32,
    /// Formula used to derive the count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_method: Option<String>,
}

/// Derived results of a scenario. Never hand-edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCalculations {
    pub total_staff: u32,
    pub total_foh: u32,
    pub total_boh: u32,
    /// FOH staff per BOH staff member
    pub foh_boh_ratio: f64,
    pub staff_detail: StaffDetail,
    pub seating_capacity: u32,
    pub foh_area: f64,
    /// Monthly labor cost
    pub labor_cost: f64,
    pub foh_cost: f64,
    pub boh_cost: f64,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
    pub labor_percentage: f64,
    pub cost_per_seat: f64,
    pub covers_per_labor_hour: f64,
    pub revenue_per_labor_hour: f64,
    pub daily_covers: u32,
    pub turns_per_day: u32,
}

/// Named, versioned parameter set plus its derived outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub outlet_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub parameters: ParameterSet,
    pub staffing_requirements: Vec<StaffingRequirement>,
    pub calculations: ScenarioCalculations,
}

impl Scenario {
    /// Headcount for a position; positions without a requirement count as 0
    pub fn required_count(&self, position_id: &str) -> u32 {
        self.staffing_requirements
            .iter()
            .filter(|r| r.position_id == position_id)
            .map(|r| r.count)
            .sum()
    }
}

/// Create scenario payload
///
/// Without explicit parameters the preset of `service_style` is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioCreate {
    pub name: String,
    pub outlet_id: String,
    #[serde(default)]
    pub service_style: ServiceStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParameterSet>,
}

impl ScenarioCreate {
    /// Parameters to start from
    pub fn resolved_parameters(&self) -> ParameterSet {
        self.parameters
            .clone()
            .unwrap_or_else(|| ParameterSet::for_style(self.service_style))
    }
}

/// Update scenario payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioUpdate {
    pub name: Option<String>,
    pub parameters: Option<ParameterSet>,
}
