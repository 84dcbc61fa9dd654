//! Worked examples with hand-checked figures

use planning_engine::calc::{
    RevenueInputs, calculate_foh_area, calculate_seating_capacity, calculate_staffing,
    project_revenue,
};
use planning_engine::core::{RoundingGranularity, SeasonalityTable, StaffingPolicy};
use planning_engine::{EngineConfig, ScenarioBook, init_logger_with_file};
use shared::models::{
    AreaPerCover, CoversPerWaiter, RunnerRatio, ScenarioCreate, ServiceParameters, ServiceStyle,
    SpaceParameters, StaffRole,
};
use shared::util::format_currency;

fn scenario_a_space() -> SpaceParameters {
    SpaceParameters {
        total_area: 300.0,
        foh_percentage: 65.0,
        area_per_cover: AreaPerCover::Standard,
        external_seating: 20,
    }
}

fn service(style: ServiceStyle, kitchen_stations: u32) -> ServiceParameters {
    ServiceParameters {
        service_style: style,
        covers_per_waiter: CoversPerWaiter::Sixteen,
        runner_to_waiter_ratio: RunnerRatio::Medium,
        kitchen_stations,
        staff_per_station: 1.5,
        service_style_adjustment: 1.0,
    }
}

#[test]
fn scenario_a_seating_capacity() {
    let space = scenario_a_space();
    assert_eq!(calculate_foh_area(&space), 195.0);
    // floor(195 / 1.67) = 116, plus 20 external seats
    assert_eq!(calculate_seating_capacity(&space), 136);
}

#[test]
fn scenario_b_dishwashers() {
    let detail = calculate_staffing(
        &scenario_a_space(),
        &service(ServiceStyle::CasualDining, 6),
        &StaffingPolicy::default(),
    );
    // max(1, ceil(136 / 80))
    assert_eq!(detail.get(StaffRole::Dishwashers), 2);
}

#[test]
fn kitchen_staffing_by_service_style() {
    let policy = StaffingPolicy::default();
    let space = scenario_a_space();

    let premium = calculate_staffing(&space, &service(ServiceStyle::PremiumDining, 5), &policy);
    assert_eq!(premium.get(StaffRole::LineCooks), 5);
    assert_eq!(premium.get(StaffRole::SousChefs), 2);

    let fast = calculate_staffing(&space, &service(ServiceStyle::FastCasual, 5), &policy);
    assert_eq!(fast.get(StaffRole::LineCooks), 3);
    assert_eq!(fast.get(StaffRole::SousChefs), 0);
}

#[test]
fn revenue_scenario_with_winter_january() {
    let inputs = RevenueInputs {
        seating_capacity: 135,
        turnover_rate: 3.0,
        occupancy_rate: 73.0,
        average_check: 135.0,
    };
    let config = EngineConfig {
        seasonality: SeasonalityTable::uniform(1.0).with_month(1, 0.9).unwrap(),
        rounding: RoundingGranularity::Unit,
        ..EngineConfig::default()
    };

    let projection = project_revenue(&inputs, &config);

    // 135 x 3.0 x 0.73 x 135 x 30 = 1,197,382.5, within 0.1% of the quoted ~1,197,841
    assert_eq!(projection.base_monthly, 1_197_382.5);
    assert!((projection.base_monthly - 1_197_841.0).abs() / 1_197_841.0 < 0.001);

    let january = projection.months[0].projected;
    assert_eq!(january, 1_077_644.0);
    assert!((january - 1_078_057.0).abs() / 1_078_057.0 < 0.001);
    assert_eq!(format_currency("SAR", january), "SAR 10,77,644");

    let sum: f64 = projection.months.iter().map(|m| m.projected).sum();
    assert_eq!(projection.annual_revenue, sum);
}

#[test]
fn executive_chef_without_seats() {
    let space = SpaceParameters {
        total_area: 50.0,
        foh_percentage: 0.0,
        area_per_cover: AreaPerCover::Premium,
        external_seating: 0,
    };
    let detail = calculate_staffing(
        &space,
        &service(ServiceStyle::PremiumDining, 4),
        &StaffingPolicy::default(),
    );
    assert_eq!(detail.get(StaffRole::ExecutiveChefs), 1);
    assert_eq!(detail.total(), 1);
}

#[test]
fn presets_end_to_end_with_file_logging() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    init_logger_with_file("debug", true, log_dir.to_str()).unwrap();
    assert!(log_dir.exists());

    let mut book = ScenarioBook::default();
    let ids: Vec<String> = ServiceStyle::ALL
        .into_iter()
        .map(|style| {
            book.create(ScenarioCreate {
                name: style.name().to_string(),
                outlet_id: "outlet-1".to_string(),
                service_style: style,
                parameters: None,
            })
            .unwrap()
            .id
        })
        .collect();

    let fast = book.get(&ids[0]).unwrap();
    let premium = book.get(&ids[2]).unwrap();
    assert_eq!(fast.calculations.staff_detail.get(StaffRole::SousChefs), 0);
    assert_eq!(premium.calculations.staff_detail.get(StaffRole::SousChefs), 2);

    let comparison = book.compare(&ids[0], &ids[2]).unwrap();
    assert_eq!(
        comparison.staff_diff,
        i64::from(premium.calculations.total_staff) - i64::from(fast.calculations.total_staff)
    );
    assert!(!comparison.highlights.is_empty());
    assert!(!comparison.recommendation.is_empty());
}
