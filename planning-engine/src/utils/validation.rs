//! Input validation helpers
//!
//! Parameter sets are validated once at the boundary (scenario creation and
//! update). The calculators assume validated input and only guard against
//! arithmetic degeneracies.

use shared::models::{
    EfficiencyParameters, OperationalParameters, ParameterSet, Position, RevenueParameters,
    ServiceParameters, SpaceParameters, StaffRole, find_position,
};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::EngineConfig;

// ── Limits ──────────────────────────────────────────────────────────

/// Scenario / outlet names
pub const MAX_NAME_LEN: usize = 200;

/// Longest opening day in hours
pub const MAX_HOURS_PER_DAY: f64 = 24.0;

/// Days in a leap year
pub const MAX_OPERATING_DAYS: u32 = 366;

/// Largest outlet floor (sqm)
pub const MAX_TOTAL_AREA: f64 = 100_000.0;

/// Largest terrace / external seat count
pub const MAX_EXTERNAL_SEATING: u32 = 10_000;

/// Largest average spend per guest
pub const MAX_AVERAGE_SPEND: f64 = 100_000.0;

/// Table turn time bounds (minutes)
pub const MIN_TABLE_TURN_TIME: f64 = 1.0;
pub const MAX_TABLE_TURN_TIME: f64 = 1_440.0;

/// Longest guest dwelling time (minutes)
pub const MAX_DWELLING_TIME: f64 = 1_440.0;

pub const MAX_KITCHEN_STATIONS: u32 = 500;
pub const MAX_STAFF_PER_STATION: f64 = 20.0;
pub const MAX_STYLE_ADJUSTMENT: f64 = 10.0;
pub const MAX_PEAK_HOUR_FACTOR: f64 = 10.0;

/// Largest monthly (or one-time) cost per person on a catalog position
pub const MAX_POSITION_COST: f64 = 1_000_000.0;

/// Largest monthly seasonality factor
pub const MAX_SEASONAL_FACTOR: f64 = 10.0;

// ── Field helpers ───────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a strictly positive finite number.
pub fn validate_positive(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::invalid_field(
            ErrorCode::ValueOutOfRange,
            field,
            format!("{field} must be greater than 0, got {value}"),
        ));
    }
    Ok(())
}

/// Validate a finite number within `[min, max]`.
pub fn validate_range(value: f64, min: f64, max: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(AppError::invalid_field(
            ErrorCode::ValueOutOfRange,
            field,
            format!("{field} must be between {min} and {max}, got {value}"),
        ));
    }
    Ok(())
}

/// Validate a strictly positive number no larger than `max`.
pub fn validate_positive_max(value: f64, max: f64, field: &str) -> AppResult<()> {
    validate_positive(value, field)?;
    if value > max {
        return Err(AppError::invalid_field(
            ErrorCode::ValueOutOfRange,
            field,
            format!("{field} exceeds maximum allowed ({max}), got {value}"),
        ));
    }
    Ok(())
}

/// Validate a count no larger than `max`.
pub fn validate_count_max(value: u32, max: u32, field: &str) -> AppResult<()> {
    if value > max {
        return Err(AppError::invalid_field(
            ErrorCode::ValueOutOfRange,
            field,
            format!("{field} exceeds maximum allowed ({max}), got {value}"),
        ));
    }
    Ok(())
}

/// Validate a fraction in `[0, 1]`.
pub fn validate_fraction(value: f64, field: &str) -> AppResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidFraction,
            field,
            format!("{field} must be between 0 and 1, got {value}"),
        ));
    }
    Ok(())
}

/// Validate a percentage in `[0, 100]`.
pub fn validate_percentage(value: f64, field: &str) -> AppResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidPercentage,
            field,
            format!("{field} must be between 0 and 100, got {value}"),
        ));
    }
    Ok(())
}

fn validate_hours(hours: &[f64], field: &str) -> AppResult<()> {
    if let Some(bad) = hours
        .iter()
        .find(|h| !(0.0..=MAX_HOURS_PER_DAY).contains(*h))
    {
        return Err(AppError::invalid_field(
            ErrorCode::InvalidOperatingHours,
            field,
            format!("{field} entries must be between 0 and 24, got {bad}"),
        ));
    }
    Ok(())
}

// ── Parameter groups ────────────────────────────────────────────────

pub fn validate_space(space: &SpaceParameters) -> AppResult<()> {
    validate_positive_max(space.total_area, MAX_TOTAL_AREA, "total_area")?;
    validate_percentage(space.foh_percentage, "foh_percentage")?;
    validate_count_max(
        space.external_seating,
        MAX_EXTERNAL_SEATING,
        "external_seating",
    )
}

pub fn validate_service(service: &ServiceParameters) -> AppResult<()> {
    if service.kitchen_stations == 0 {
        return Err(AppError::invalid_field(
            ErrorCode::ValueOutOfRange,
            "kitchen_stations",
            "kitchen_stations must be at least 1",
        ));
    }
    validate_count_max(
        service.kitchen_stations,
        MAX_KITCHEN_STATIONS,
        "kitchen_stations",
    )?;
    validate_range(
        service.staff_per_station,
        0.0,
        MAX_STAFF_PER_STATION,
        "staff_per_station",
    )?;
    validate_positive_max(
        service.service_style_adjustment,
        MAX_STYLE_ADJUSTMENT,
        "service_style_adjustment",
    )
}

pub fn validate_revenue(revenue: &RevenueParameters) -> AppResult<()> {
    validate_positive_max(
        revenue.average_spend_per_guest,
        MAX_AVERAGE_SPEND,
        "average_spend_per_guest",
    )?;
    validate_range(
        revenue.guest_dwelling_time,
        0.0,
        MAX_DWELLING_TIME,
        "guest_dwelling_time",
    )?;
    validate_range(
        revenue.table_turn_time,
        MIN_TABLE_TURN_TIME,
        MAX_TABLE_TURN_TIME,
        "table_turn_time",
    )?;
    validate_range(
        revenue.peak_hour_factor,
        1.0,
        MAX_PEAK_HOUR_FACTOR,
        "peak_hour_factor",
    )?;
    validate_fraction(revenue.empty_seats_provision, "empty_seats_provision")
}

pub fn validate_operational(operational: &OperationalParameters) -> AppResult<()> {
    if operational.operating_days > MAX_OPERATING_DAYS {
        return Err(AppError::invalid_field(
            ErrorCode::ValueOutOfRange,
            "operating_days",
            format!(
                "operating_days must be at most {MAX_OPERATING_DAYS}, got {}",
                operational.operating_days
            ),
        ));
    }
    validate_fraction(
        operational.ramadan_capacity_reduction,
        "ramadan_capacity_reduction",
    )?;
    validate_hours(&operational.weekday_hours, "weekday_hours")?;
    validate_hours(&operational.weekend_hours, "weekend_hours")?;

    if let Some(hour) = operational.peak_hours_distribution.keys().find(|h| **h > 23) {
        return Err(AppError::invalid_field(
            ErrorCode::ValueOutOfRange,
            "peak_hours_distribution",
            format!("peak hour must be between 0 and 23, got {hour}"),
        ));
    }
    for share in operational.peak_hours_distribution.values() {
        validate_fraction(*share, "peak_hours_distribution")?;
    }
    Ok(())
}

pub fn validate_efficiency(efficiency: &EfficiencyParameters) -> AppResult<()> {
    validate_fraction(efficiency.staff_utilization_rate, "staff_utilization_rate")?;
    validate_fraction(efficiency.technology_impact, "technology_impact")?;
    validate_fraction(
        efficiency.cross_training_capability,
        "cross_training_capability",
    )?;
    for factor in efficiency.position_efficiency.values() {
        validate_fraction(*factor, "position_efficiency")?;
    }
    Ok(())
}

/// Validate every parameter group, stopping at the first error
pub fn validate_parameter_set(params: &ParameterSet) -> AppResult<()> {
    validate_space(&params.space)?;
    validate_service(&params.service)?;
    validate_revenue(&params.revenue)?;
    validate_operational(&params.operational)?;
    validate_efficiency(&params.efficiency)
}

// ── Reference data and configuration ────────────────────────────────

/// Every staffed role must have a catalog position with bounded costs
pub fn validate_position_catalog(positions: &[Position]) -> AppResult<()> {
    for role in StaffRole::ALL {
        if find_position(positions, role.position_id()).is_none() {
            return Err(AppError::position_not_found(role.position_id()));
        }
    }
    for position in positions {
        for (value, field) in [
            (position.base_salary, "base_salary"),
            (position.variable_pay, "variable_pay"),
            (position.benefits, "benefits"),
            (position.training_cost, "training_cost"),
            (position.recruitment_cost, "recruitment_cost"),
            (position.meal_cost, "meal_cost"),
        ] {
            validate_range(value, 0.0, MAX_POSITION_COST, field)
                .map_err(|e| e.with_detail("position_id", position.id.as_str()))?;
        }
        validate_fraction(position.turnover_rate, "turnover_rate")
            .map_err(|e| e.with_detail("position_id", position.id.as_str()))?;
    }
    Ok(())
}

/// Bounds on the engine configuration so the calculators stay in Decimal range
pub fn validate_engine_config(config: &EngineConfig) -> AppResult<()> {
    validate_range(f64::from(config.days_per_month), 1.0, 31.0, "days_per_month")?;
    validate_range(
        f64::from(config.hours_per_staff_month),
        1.0,
        744.0,
        "hours_per_staff_month",
    )?;
    validate_range(
        f64::from(config.months_in_period),
        1.0,
        120.0,
        "months_in_period",
    )?;
    for month in 1..=12 {
        validate_range(
            config.seasonality.factor(month),
            0.0,
            MAX_SEASONAL_FACTOR,
            "seasonality",
        )?;
    }

    let staffing = &config.staffing;
    validate_range(staffing.prep_cooks_per_line_cook, 0.0, 10.0, "prep_cooks_per_line_cook")?;
    validate_range(staffing.helpers_per_line_cook, 0.0, 10.0, "helpers_per_line_cook")?;
    for profile in [
        staffing.kitchen.fast_casual,
        staffing.kitchen.casual_dining,
        staffing.kitchen.premium_dining,
    ] {
        validate_positive_max(profile.stations_per_chef, 100.0, "stations_per_chef")?;
    }

    let costs = &config.profit_loss;
    for (value, field) in [
        (costs.food_cost_percentage, "food_cost_percentage"),
        (costs.rent_percentage, "rent_percentage"),
        (costs.utilities_percentage, "utilities_percentage"),
        (costs.marketing_percentage, "marketing_percentage"),
        (costs.other_percentage, "other_percentage"),
        (costs.minimum_margin, "minimum_margin"),
        (costs.target_margin, "target_margin"),
        (costs.high_cost_share, "high_cost_share"),
    ] {
        validate_percentage(value, field)?;
    }

    let optimization = &config.optimization;
    validate_percentage(optimization.buffer_percentage, "buffer_percentage")?;
    validate_percentage(
        optimization.significant_reduction,
        "significant_reduction",
    )?;
    if optimization.min_per_position > optimization.max_per_position {
        return Err(AppError::invalid_field(
            ErrorCode::ValueOutOfRange,
            "min_per_position",
            format!(
                "min_per_position ({}) must not exceed max_per_position ({})",
                optimization.min_per_position, optimization.max_per_position
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ServiceStyle;

    fn field_of(err: &AppError) -> String {
        err.details
            .as_ref()
            .and_then(|d| d.get("field"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_presets_are_valid() {
        for style in ServiceStyle::ALL {
            validate_parameter_set(&ParameterSet::for_style(style)).unwrap();
        }
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Main Hall", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_rejects_zero_area() {
        let mut params = ParameterSet::for_style(ServiceStyle::CasualDining);
        params.space.total_area = 0.0;
        let err = validate_parameter_set(&params).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(field_of(&err), "total_area");
    }

    #[test]
    fn test_rejects_foh_percentage_above_100() {
        let mut params = ParameterSet::for_style(ServiceStyle::CasualDining);
        params.space.foh_percentage = 120.0;
        let err = validate_parameter_set(&params).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPercentage);
    }

    #[test]
    fn test_rejects_empty_seats_out_of_range() {
        let mut params = ParameterSet::for_style(ServiceStyle::FastCasual);
        params.revenue.empty_seats_provision = 1.5;
        let err = validate_parameter_set(&params).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFraction);
        assert_eq!(field_of(&err), "empty_seats_provision");
    }

    #[test]
    fn test_rejects_bad_hours_and_peak_hour() {
        let mut params = ParameterSet::for_style(ServiceStyle::PremiumDining);
        params.operational.weekend_hours = vec![10.0, 25.0];
        let err = validate_parameter_set(&params).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOperatingHours);

        let mut params = ParameterSet::for_style(ServiceStyle::PremiumDining);
        params.operational.peak_hours_distribution.insert(24, 0.1);
        let err = validate_parameter_set(&params).unwrap_err();
        assert_eq!(field_of(&err), "peak_hours_distribution");
    }

    #[test]
    fn test_rejects_zero_kitchen_stations() {
        let mut params = ParameterSet::for_style(ServiceStyle::CasualDining);
        params.service.kitchen_stations = 0;
        let err = validate_parameter_set(&params).unwrap_err();
        assert_eq!(field_of(&err), "kitchen_stations");
    }

    #[test]
    fn test_rejects_values_beyond_decimal_safe_limits() {
        let cases: [(fn(&mut ParameterSet), &str); 5] = [
            (|p| p.space.total_area = 1e28, "total_area"),
            (|p| p.space.external_seating = MAX_EXTERNAL_SEATING + 1, "external_seating"),
            (|p| p.revenue.average_spend_per_guest = 1e25, "average_spend_per_guest"),
            (|p| p.revenue.table_turn_time = 1e-9, "table_turn_time"),
            (|p| p.revenue.table_turn_time = MAX_TABLE_TURN_TIME + 1.0, "table_turn_time"),
        ];
        for (mutate, field) in cases {
            let mut params = ParameterSet::for_style(ServiceStyle::CasualDining);
            mutate(&mut params);
            let err = validate_parameter_set(&params).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValueOutOfRange);
            assert_eq!(field_of(&err), field);
        }
    }

    #[test]
    fn test_limits_are_inclusive() {
        let mut params = ParameterSet::for_style(ServiceStyle::PremiumDining);
        params.space.total_area = MAX_TOTAL_AREA;
        params.space.external_seating = MAX_EXTERNAL_SEATING;
        params.revenue.average_spend_per_guest = MAX_AVERAGE_SPEND;
        params.revenue.table_turn_time = MIN_TABLE_TURN_TIME;
        validate_parameter_set(&params).unwrap();
    }

    #[test]
    fn test_position_catalog() {
        let catalog = shared::models::default_catalog();
        validate_position_catalog(&catalog).unwrap();

        let partial: Vec<Position> = catalog
            .iter()
            .filter(|p| p.id != StaffRole::Dishwashers.position_id())
            .cloned()
            .collect();
        let err = validate_position_catalog(&partial).unwrap_err();
        assert_eq!(err.code, ErrorCode::PositionNotFound);

        let mut expensive = catalog.clone();
        expensive[0].base_salary = 1e25;
        let err = validate_position_catalog(&expensive).unwrap_err();
        assert_eq!(field_of(&err), "base_salary");
    }

    #[test]
    fn test_engine_config_bounds() {
        validate_engine_config(&EngineConfig::default()).unwrap();

        let config = EngineConfig {
            days_per_month: 0,
            ..EngineConfig::default()
        };
        assert_eq!(field_of(&validate_engine_config(&config).unwrap_err()), "days_per_month");

        let mut config = EngineConfig::default();
        config.seasonality = crate::core::SeasonalityTable::uniform(1e20);
        assert_eq!(field_of(&validate_engine_config(&config).unwrap_err()), "seasonality");

        let mut config = EngineConfig::default();
        config.optimization.min_per_position = 30;
        assert!(validate_engine_config(&config).is_err());
    }
}
