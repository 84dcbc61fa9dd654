//! Efficiency report
//!
//! Productivity figures derived from the efficiency parameters and a
//! scenario's calculations.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{ParameterSet, ScenarioCalculations, StaffRole};

use crate::core::EngineConfig;
use crate::utils::math::{ceil_count, floor_count, safe_div, to_decimal, to_f64};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyReport {
    /// Staff hours per month actually spent working
    pub productive_hours: f64,
    pub revenue_per_productive_hour: f64,
    /// Servers needed after the style adjustment and technology savings
    pub technology_adjusted_servers: u32,
    pub cross_trained_staff: u32,
    pub average_position_efficiency: f64,
}

/// Build the efficiency report of a processed scenario
pub fn efficiency_report(
    params: &ParameterSet,
    calculations: &ScenarioCalculations,
    config: &EngineConfig,
) -> EfficiencyReport {
    let efficiency = &params.efficiency;
    let staff = Decimal::from(calculations.total_staff);

    let productive_hours = staff
        * Decimal::from(config.hours_per_staff_month)
        * to_decimal(efficiency.staff_utilization_rate);
    let servers = Decimal::from(calculations.staff_detail.get(StaffRole::Servers));
    let adjusted_servers = servers
        * to_decimal(params.service.service_style_adjustment)
        * (Decimal::ONE - to_decimal(efficiency.technology_impact));

    EfficiencyReport {
        productive_hours: to_f64(productive_hours),
        revenue_per_productive_hour: to_f64(safe_div(
            to_decimal(calculations.monthly_revenue),
            productive_hours,
        )),
        technology_adjusted_servers: ceil_count(adjusted_servers),
        cross_trained_staff: floor_count(staff * to_decimal(efficiency.cross_training_capability)),
        average_position_efficiency: average_position_efficiency(params),
    }
}

/// Average of the position efficiency factors, 0 when none are set
pub fn average_position_efficiency(params: &ParameterSet) -> f64 {
    let factors = &params.efficiency.position_efficiency;
    let total: Decimal = factors.values().map(|f| to_decimal(*f)).sum();
    to_f64(safe_div(total, Decimal::from(factors.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ServiceStyle, StaffDetail};

    #[test]
    fn test_report_for_premium_dining() {
        let params = ParameterSet::for_style(ServiceStyle::PremiumDining);
        let mut detail = StaffDetail::new();
        detail.set(StaffRole::Servers, 10);
        let calculations = ScenarioCalculations {
            total_staff: 40,
            staff_detail: detail,
            monthly_revenue: 2_052_000.0,
            ..ScenarioCalculations::default()
        };

        let report = efficiency_report(&params, &calculations, &EngineConfig::default());
        // 40 x 160 x 0.75
        assert_eq!(report.productive_hours, 4_800.0);
        assert_eq!(report.revenue_per_productive_hour, 427.5);
        // 10 x 1.2 x 0.95 = 11.4
        assert_eq!(report.technology_adjusted_servers, 12);
        // 40 x 0.1
        assert_eq!(report.cross_trained_staff, 4);
        // (0.8 + 0.75 + 0.82 + 0.78) / 4 = 0.7875
        assert_eq!(report.average_position_efficiency, 0.79);
    }

    #[test]
    fn test_no_staff_no_division_error() {
        let params = ParameterSet::for_style(ServiceStyle::FastCasual);
        let report = efficiency_report(&params, &ScenarioCalculations::default(), &EngineConfig::default());
        assert_eq!(report.productive_hours, 0.0);
        assert_eq!(report.revenue_per_productive_hour, 0.0);
        assert_eq!(report.technology_adjusted_servers, 0);
    }

    #[test]
    fn test_average_position_efficiency_empty() {
        let mut params = ParameterSet::for_style(ServiceStyle::FastCasual);
        assert_eq!(average_position_efficiency(&params), 0.86);
        params.efficiency.position_efficiency.clear();
        assert_eq!(average_position_efficiency(&params), 0.0);
    }
}
