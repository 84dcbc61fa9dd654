//! Staffing Calculator
//!
//! Seating capacity from space parameters, and headcount per role from
//! seating capacity plus service parameters.
//!
//! Rounding: every count is a ceiling except prep cooks and kitchen
//! helpers, which round half away from zero.

use rust_decimal::prelude::*;
use shared::models::{ServiceParameters, SpaceParameters, StaffDetail, StaffRole, StaffingRequirement};

use crate::core::StaffingPolicy;
use crate::utils::math::{ceil_count, floor_count, round_count, safe_div, to_decimal, to_f64};

/// Front-of-house floor area (sqm)
pub fn calculate_foh_area(space: &SpaceParameters) -> f64 {
    to_f64(foh_area(space))
}

fn foh_area(space: &SpaceParameters) -> Decimal {
    to_decimal(space.total_area) * to_decimal(space.foh_percentage) / Decimal::ONE_HUNDRED
}

/// Indoor seats that fit the front-of-house area
pub fn calculate_internal_capacity(space: &SpaceParameters) -> u32 {
    floor_count(safe_div(foh_area(space), to_decimal(space.area_per_cover.sqm())))
}

/// Indoor seats plus external seating
pub fn calculate_seating_capacity(space: &SpaceParameters) -> u32 {
    calculate_internal_capacity(space).saturating_add(space.external_seating)
}

/// Headcount per role for the given space and service parameters
pub fn calculate_staffing(
    space: &SpaceParameters,
    service: &ServiceParameters,
    policy: &StaffingPolicy,
) -> StaffDetail {
    let seating = calculate_seating_capacity(space);
    staffing_for_capacity(seating, service, policy)
}

/// Headcount per role for a known seating capacity
pub fn staffing_for_capacity(
    seating: u32,
    service: &ServiceParameters,
    policy: &StaffingPolicy,
) -> StaffDetail {
    let mut detail: StaffDetail = StaffRole::ALL.into_iter().map(|role| (role, 0)).collect();
    detail.set(StaffRole::ExecutiveChefs, 1);

    if seating == 0 {
        tracing::debug!(target: "calc", "No seating capacity, only the executive chef is staffed");
        return detail;
    }

    // Front of house
    let servers = seating.div_ceil(service.covers_per_waiter.covers());
    let runners = ceil_count(
        Decimal::from(servers) * Decimal::from(service.runner_to_waiter_ratio.percent())
            / Decimal::ONE_HUNDRED,
    );
    detail.set(StaffRole::Servers, servers);
    detail.set(StaffRole::Runners, runners);
    detail.set(StaffRole::Hosts, policy.hosts.headcount(seating));
    detail.set(StaffRole::Cashiers, policy.cashiers.headcount(seating));

    // Management
    detail.set(StaffRole::GeneralManagers, policy.general_managers.headcount(seating));
    detail.set(StaffRole::AssistantManagers, policy.assistant_managers.headcount(seating));
    detail.set(StaffRole::ShiftSupervisors, policy.shift_supervisors.headcount(seating));

    // Kitchen
    let kitchen = policy.kitchen.for_style(service.service_style);
    let line_cooks = ceil_count(safe_div(
        Decimal::from(service.kitchen_stations),
        to_decimal(kitchen.stations_per_chef),
    ));
    let line = Decimal::from(line_cooks);
    detail.set(StaffRole::SousChefs, kitchen.sous_chefs);
    detail.set(StaffRole::LineCooks, line_cooks);
    detail.set(
        StaffRole::PrepCooks,
        round_count(line * to_decimal(policy.prep_cooks_per_line_cook)),
    );
    detail.set(
        StaffRole::KitchenHelpers,
        round_count(line * to_decimal(policy.helpers_per_line_cook)),
    );
    let dishwashers = match policy.covers_per_dishwasher {
        0 => 1,
        per => seating.div_ceil(per).max(1),
    };
    detail.set(StaffRole::Dishwashers, dishwashers);

    tracing::debug!(
        target: "calc",
        seating,
        style = %service.service_style,
        total = detail.total(),
        "Staffing calculated"
    );
    detail
}

/// Position-keyed requirements with the formula behind each count
///
/// Roles with a zero count are left out.
pub fn staffing_requirements(
    detail: &StaffDetail,
    service: &ServiceParameters,
    policy: &StaffingPolicy,
) -> Vec<StaffingRequirement> {
    let kitchen = policy.kitchen.for_style(service.service_style);
    detail
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(role, count)| {
            let method = match role {
                StaffRole::Servers => {
                    format!("Seating / {} covers per waiter", service.covers_per_waiter.covers())
                }
                StaffRole::Runners => format!(
                    "{}% of servers",
                    service.runner_to_waiter_ratio.percent()
                ),
                StaffRole::Hosts => policy.hosts.describe(),
                StaffRole::Cashiers => policy.cashiers.describe(),
                StaffRole::GeneralManagers => policy.general_managers.describe(),
                StaffRole::AssistantManagers => policy.assistant_managers.describe(),
                StaffRole::ShiftSupervisors => policy.shift_supervisors.describe(),
                StaffRole::ExecutiveChefs => "Fixed at 1".to_string(),
                StaffRole::SousChefs => format!("{} by service style", service.service_style),
                StaffRole::LineCooks => format!(
                    "{} stations / {} stations per chef",
                    service.kitchen_stations, kitchen.stations_per_chef
                ),
                StaffRole::PrepCooks => format!(
                    "{} x line cooks",
                    policy.prep_cooks_per_line_cook
                ),
                StaffRole::KitchenHelpers => {
                    format!("{} x line cooks", policy.helpers_per_line_cook)
                }
                StaffRole::Dishwashers => {
                    format!("1 per {} covers (min 1)", policy.covers_per_dishwasher)
                }
            };
            StaffingRequirement {
                position_id: role.position_id().to_string(),
                count,
                calculation_method: Some(method),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{
        AreaPerCover, CoversPerWaiter, ParameterSet, RunnerRatio, ServiceStyle,
    };

    fn space(total_area: f64, foh_percentage: f64, area: AreaPerCover, external: u32) -> SpaceParameters {
        SpaceParameters {
            total_area,
            foh_percentage,
            area_per_cover: area,
            external_seating: external,
        }
    }

    fn service(style: ServiceStyle, stations: u32) -> ServiceParameters {
        ServiceParameters {
            service_style: style,
            covers_per_waiter: CoversPerWaiter::Sixteen,
            runner_to_waiter_ratio: RunnerRatio::Medium,
            kitchen_stations: stations,
            staff_per_station: 1.5,
            service_style_adjustment: 1.0,
        }
    }

    #[test]
    fn test_seating_capacity_concrete() {
        let s = space(300.0, 65.0, AreaPerCover::Standard, 20);
        assert_eq!(calculate_foh_area(&s), 195.0);
        assert_eq!(calculate_internal_capacity(&s), 116);
        assert_eq!(calculate_seating_capacity(&s), 136);
    }

    #[test]
    fn test_front_of_house_counts() {
        let s = space(300.0, 65.0, AreaPerCover::Standard, 20);
        let detail = calculate_staffing(&s, &service(ServiceStyle::CasualDining, 6), &StaffingPolicy::default());

        // 136 seats / 16 covers = 8.5 -> 9 servers, 50% -> 4.5 -> 5 runners
        assert_eq!(detail.get(StaffRole::Servers), 9);
        assert_eq!(detail.get(StaffRole::Runners), 5);
        assert_eq!(detail.get(StaffRole::Hosts), 3);
        assert_eq!(detail.get(StaffRole::Cashiers), 2);
        assert_eq!(detail.get(StaffRole::GeneralManagers), 1);
        assert_eq!(detail.get(StaffRole::AssistantManagers), 1);
        assert_eq!(detail.get(StaffRole::ShiftSupervisors), 2);
        assert_eq!(detail.get(StaffRole::Dishwashers), 2);
    }

    #[test]
    fn test_kitchen_by_style() {
        let s = space(300.0, 65.0, AreaPerCover::Standard, 20);
        let policy = StaffingPolicy::default();

        let premium = calculate_staffing(&s, &service(ServiceStyle::PremiumDining, 5), &policy);
        assert_eq!(premium.get(StaffRole::LineCooks), 5);
        assert_eq!(premium.get(StaffRole::SousChefs), 2);
        // 5 x 0.75 = 3.75 -> 4, 5 x 0.5 = 2.5 -> 3
        assert_eq!(premium.get(StaffRole::PrepCooks), 4);
        assert_eq!(premium.get(StaffRole::KitchenHelpers), 3);

        let fast = calculate_staffing(&s, &service(ServiceStyle::FastCasual, 5), &policy);
        assert_eq!(fast.get(StaffRole::LineCooks), 3);
        assert_eq!(fast.get(StaffRole::SousChefs), 0);

        let casual = calculate_staffing(&s, &service(ServiceStyle::CasualDining, 6), &policy);
        assert_eq!(casual.get(StaffRole::LineCooks), 4);
        assert_eq!(casual.get(StaffRole::SousChefs), 1);
    }

    #[test]
    fn test_zero_seating_keeps_only_executive_chef() {
        let s = space(300.0, 0.0, AreaPerCover::Standard, 0);
        let detail = calculate_staffing(&s, &service(ServiceStyle::PremiumDining, 8), &StaffingPolicy::default());
        assert_eq!(detail.get(StaffRole::ExecutiveChefs), 1);
        assert_eq!(detail.total(), 1);
    }

    #[test]
    fn test_requirements_skip_zero_counts_and_describe_method() {
        let params = ParameterSet::for_style(ServiceStyle::FastCasual);
        let policy = StaffingPolicy::default();
        let detail = calculate_staffing(&params.space, &params.service, &policy);
        let reqs = staffing_requirements(&detail, &params.service, &policy);

        assert!(reqs.iter().all(|r| r.count > 0));
        assert!(!reqs.iter().any(|r| r.position_id == StaffRole::SousChefs.position_id()));
        let total: u32 = reqs.iter().map(|r| r.count).sum();
        assert_eq!(total, detail.total());

        let servers = reqs
            .iter()
            .find(|r| r.position_id == StaffRole::Servers.position_id())
            .unwrap();
        assert_eq!(
            servers.calculation_method.as_deref(),
            Some("Seating / 24 covers per waiter")
        );
    }
}
