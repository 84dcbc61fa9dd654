//! Planning Parameter Models
//!
//! Pure data describing an outlet: space, service, revenue, operational
//! and efficiency inputs. Enumerated inputs are closed enums so an
//! out-of-range value fails at the boundary (deserialization or `TryFrom`)
//! instead of inside a calculation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::service_style::ServiceStyle;
use crate::error::{AppError, ErrorCode};

// ==================== Enumerated inputs ====================

/// Floor area allotted per cover (sqm), linked to service style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum AreaPerCover {
    /// 1.5 sqm
    Compact,
    /// 1.67 sqm
    Standard,
    /// 1.86 sqm
    Comfortable,
    /// 2.05 sqm
    Spacious,
    /// 2.32 sqm
    Premium,
}

impl AreaPerCover {
    pub const ALL: [AreaPerCover; 5] = [
        AreaPerCover::Compact,
        AreaPerCover::Standard,
        AreaPerCover::Comfortable,
        AreaPerCover::Spacious,
        AreaPerCover::Premium,
    ];

    /// Square metres per cover
    pub const fn sqm(&self) -> f64 {
        match self {
            Self::Compact => 1.5,
            Self::Standard => 1.67,
            Self::Comfortable => 1.86,
            Self::Spacious => 2.05,
            Self::Premium => 2.32,
        }
    }
}

impl TryFrom<f64> for AreaPerCover {
    type Error = AppError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|a| (a.sqm() - value).abs() < 1e-9)
            .ok_or_else(|| {
                AppError::invalid_field(
                    ErrorCode::InvalidAreaPerCover,
                    "area_per_cover",
                    format!(
                        "area_per_cover must be one of 1.5, 1.67, 1.86, 2.05, 2.32, got {}",
                        value
                    ),
                )
            })
    }
}

impl From<AreaPerCover> for f64 {
    fn from(value: AreaPerCover) -> Self {
        value.sqm()
    }
}

/// Covers a single waiter is expected to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CoversPerWaiter {
    Twelve,
    Sixteen,
    Twenty,
    TwentyFour,
}

impl CoversPerWaiter {
    pub const fn covers(&self) -> u32 {
        match self {
            Self::Twelve => 12,
            Self::Sixteen => 16,
            Self::Twenty => 20,
            Self::TwentyFour => 24,
        }
    }
}

impl TryFrom<u32> for CoversPerWaiter {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            12 => Ok(Self::Twelve),
            16 => Ok(Self::Sixteen),
            20 => Ok(Self::Twenty),
            24 => Ok(Self::TwentyFour),
            other => Err(AppError::invalid_field(
                ErrorCode::InvalidCoversPerWaiter,
                "covers_per_waiter",
                format!("covers_per_waiter must be one of 12, 16, 20, 24, got {}", other),
            )),
        }
    }
}

impl From<CoversPerWaiter> for u32 {
    fn from(value: CoversPerWaiter) -> Self {
        value.covers()
    }
}

/// Runners per waiter, as a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RunnerRatio {
    /// 1:4
    Basic,
    /// 1:2
    Medium,
    /// 3:4
    High,
    /// 1:1
    Full,
}

impl RunnerRatio {
    pub const fn percent(&self) -> u32 {
        match self {
            Self::Basic => 25,
            Self::Medium => 50,
            Self::High => 75,
            Self::Full => 100,
        }
    }
}

impl TryFrom<u32> for RunnerRatio {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            25 => Ok(Self::Basic),
            50 => Ok(Self::Medium),
            75 => Ok(Self::High),
            100 => Ok(Self::Full),
            other => Err(AppError::invalid_field(
                ErrorCode::InvalidRunnerRatio,
                "runner_to_waiter_ratio",
                format!(
                    "runner_to_waiter_ratio must be one of 25, 50, 75, 100, got {}",
                    other
                ),
            )),
        }
    }
}

impl From<RunnerRatio> for u32 {
    fn from(value: RunnerRatio) -> Self {
        value.percent()
    }
}

// ==================== Parameter groups ====================

/// Space parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceParameters {
    /// Total floor area in sqm
    pub total_area: f64,
    /// Share of the floor used as front of house (0-100)
    pub foh_percentage: f64,
    pub area_per_cover: AreaPerCover,
    /// Terrace / outdoor seats, added on top of the indoor capacity
    pub external_seating: u32,
}

/// Service parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceParameters {
    pub service_style: ServiceStyle,
    pub covers_per_waiter: CoversPerWaiter,
    pub runner_to_waiter_ratio: RunnerRatio,
    pub kitchen_stations: u32,
    pub staff_per_station: f64,
    /// Multiplier applied by service style (typically 1.0-1.3)
    pub service_style_adjustment: f64,
}

/// Revenue parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueParameters {
    pub average_spend_per_guest: f64,
    /// Minutes
    pub guest_dwelling_time: f64,
    /// Minutes
    pub table_turn_time: f64,
    /// Multiplier for peak hours (>= 1)
    pub peak_hour_factor: f64,
    /// Expected share of empty seats (0-1)
    pub empty_seats_provision: f64,
}

/// Operational parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalParameters {
    /// Operating days per year
    pub operating_days: u32,
    /// Capacity reduction during Ramadan (0-1)
    pub ramadan_capacity_reduction: f64,
    /// Opening hours for each weekday
    pub weekday_hours: Vec<f64>,
    /// Opening hours for each weekend day
    pub weekend_hours: Vec<f64>,
    /// Hour of day (0-23) -> share of daily covers
    #[serde(default)]
    pub peak_hours_distribution: BTreeMap<u8, f64>,
}

/// Efficiency parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyParameters {
    /// 0-1
    pub staff_utilization_rate: f64,
    /// Position name -> efficiency factor (0-1)
    #[serde(default)]
    pub position_efficiency: BTreeMap<String, f64>,
    /// Fractional labor reduction from technology (0-1)
    pub technology_impact: f64,
    /// Share of staff able to cover multiple roles (0-1)
    pub cross_training_capability: f64,
}

/// The complete input of one scenario calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub space: SpaceParameters,
    pub service: ServiceParameters,
    pub revenue: RevenueParameters,
    pub operational: OperationalParameters,
    pub efficiency: EfficiencyParameters,
}

impl ParameterSet {
    /// Starting parameters for a service style
    pub fn for_style(style: ServiceStyle) -> Self {
        match style {
            ServiceStyle::FastCasual => Self {
                space: SpaceParameters {
                    total_area: 200.0,
                    foh_percentage: 65.0,
                    area_per_cover: AreaPerCover::Compact,
                    external_seating: 20,
                },
                service: ServiceParameters {
                    service_style: style,
                    covers_per_waiter: CoversPerWaiter::TwentyFour,
                    runner_to_waiter_ratio: RunnerRatio::Basic,
                    kitchen_stations: 4,
                    staff_per_station: 1.5,
                    service_style_adjustment: 0.8,
                },
                revenue: RevenueParameters {
                    average_spend_per_guest: 85.0,
                    guest_dwelling_time: 45.0,
                    table_turn_time: 60.0,
                    peak_hour_factor: 1.3,
                    empty_seats_provision: 0.1,
                },
                operational: OperationalParameters {
                    operating_days: 350,
                    ramadan_capacity_reduction: 0.5,
                    weekday_hours: vec![11.0; 5],
                    weekend_hours: vec![12.0; 2],
                    peak_hours_distribution: BTreeMap::from([
                        (12, 0.15),
                        (13, 0.2),
                        (14, 0.1),
                        (18, 0.15),
                        (19, 0.25),
                        (20, 0.15),
                    ]),
                },
                efficiency: EfficiencyParameters {
                    staff_utilization_rate: 0.85,
                    position_efficiency: position_efficiency(0.9, 0.85, 0.88, 0.82),
                    technology_impact: 0.1,
                    cross_training_capability: 0.15,
                },
            },
            ServiceStyle::CasualDining => Self {
                space: SpaceParameters {
                    total_area: 300.0,
                    foh_percentage: 60.0,
                    area_per_cover: AreaPerCover::Comfortable,
                    external_seating: 30,
                },
                service: ServiceParameters {
                    service_style: style,
                    covers_per_waiter: CoversPerWaiter::Sixteen,
                    runner_to_waiter_ratio: RunnerRatio::Medium,
                    kitchen_stations: 6,
                    staff_per_station: 1.8,
                    service_style_adjustment: 1.0,
                },
                revenue: RevenueParameters {
                    average_spend_per_guest: 120.0,
                    guest_dwelling_time: 75.0,
                    table_turn_time: 90.0,
                    peak_hour_factor: 1.4,
                    empty_seats_provision: 0.15,
                },
                operational: OperationalParameters {
                    operating_days: 350,
                    ramadan_capacity_reduction: 0.5,
                    weekday_hours: vec![12.0; 5],
                    weekend_hours: vec![13.0; 2],
                    peak_hours_distribution: BTreeMap::from([
                        (13, 0.15),
                        (14, 0.15),
                        (19, 0.2),
                        (20, 0.3),
                        (21, 0.2),
                    ]),
                },
                efficiency: EfficiencyParameters {
                    staff_utilization_rate: 0.8,
                    position_efficiency: position_efficiency(0.85, 0.8, 0.85, 0.8),
                    technology_impact: 0.08,
                    cross_training_capability: 0.12,
                },
            },
            ServiceStyle::PremiumDining => Self {
                space: SpaceParameters {
                    total_area: 400.0,
                    foh_percentage: 55.0,
                    area_per_cover: AreaPerCover::Premium,
                    external_seating: 20,
                },
                service: ServiceParameters {
                    service_style: style,
                    covers_per_waiter: CoversPerWaiter::Twelve,
                    runner_to_waiter_ratio: RunnerRatio::High,
                    kitchen_stations: 8,
                    staff_per_station: 2.2,
                    service_style_adjustment: 1.2,
                },
                revenue: RevenueParameters {
                    average_spend_per_guest: 250.0,
                    guest_dwelling_time: 120.0,
                    table_turn_time: 150.0,
                    peak_hour_factor: 1.3,
                    empty_seats_provision: 0.2,
                },
                operational: OperationalParameters {
                    operating_days: 350,
                    ramadan_capacity_reduction: 0.5,
                    weekday_hours: vec![8.0; 5],
                    weekend_hours: vec![10.0; 2],
                    peak_hours_distribution: BTreeMap::from([
                        (19, 0.25),
                        (20, 0.35),
                        (21, 0.25),
                        (22, 0.15),
                    ]),
                },
                efficiency: EfficiencyParameters {
                    staff_utilization_rate: 0.75,
                    position_efficiency: position_efficiency(0.8, 0.75, 0.82, 0.78),
                    technology_impact: 0.05,
                    cross_training_capability: 0.1,
                },
            },
        }
    }
}

fn position_efficiency(server: f64, runner: f64, line_cook: f64, prep_cook: f64) -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("Server/Waiter".to_string(), server),
        ("Runner/Busser".to_string(), runner),
        ("Line Cook".to_string(), line_cook),
        ("Prep Cook".to_string(), prep_cook),
    ])
}
