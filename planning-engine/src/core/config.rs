use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::ServiceStyle;
use shared::{AppError, AppResult};
use std::str::FromStr;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | PLANNER_INCLUDE_SEASONALITY | true | Apply the monthly seasonality table |
/// | PLANNER_ROUNDING | unit | Projected month rounding: `unit` or `thousand` |
/// | PLANNER_DAYS_PER_MONTH | 30 | Trading days in a revenue month |
/// | PLANNER_HOURS_PER_STAFF_MONTH | 160 | Paid hours per staff member per month |
///
/// Lookup tables (seasonality, staffing policy, comparison thresholds,
/// operating cost rates, optimization policy) are
/// not read from the environment; embed them through serde or set them in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub include_seasonality: bool,
    pub rounding: RoundingGranularity,
    pub days_per_month: u32,
    pub hours_per_staff_month: u32,
    /// Months the labor cost is spread over in `cost_per_seat`
    pub months_in_period: u32,
    pub seasonality: SeasonalityTable,
    pub staffing: StaffingPolicy,
    pub thresholds: ComparisonThresholds,
    pub profit_loss: ProfitLossPolicy,
    pub optimization: OptimizationPolicy,
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            include_seasonality: lookup("PLANNER_INCLUDE_SEASONALITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.include_seasonality),
            rounding: lookup("PLANNER_ROUNDING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.rounding),
            days_per_month: lookup("PLANNER_DAYS_PER_MONTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.days_per_month),
            hours_per_staff_month: lookup("PLANNER_HOURS_PER_STAFF_MONTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.hours_per_staff_month),
            ..defaults
        }
    }

    /// Override the seasonality switch and rounding
    ///
    /// Commonly used in tests
    pub fn with_overrides(include_seasonality: bool, rounding: RoundingGranularity) -> Self {
        Self {
            include_seasonality,
            rounding,
            ..Self::default()
        }
    }

    /// Seasonality factor for a calendar month (1-12), 1.0 when disabled
    pub fn seasonal_factor(&self, month: u32) -> f64 {
        if self.include_seasonality {
            self.seasonality.factor(month)
        } else {
            1.0
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            include_seasonality: true,
            rounding: RoundingGranularity::Unit,
            days_per_month: 30,
            hours_per_staff_month: 160,
            months_in_period: 12,
            seasonality: SeasonalityTable::default(),
            staffing: StaffingPolicy::default(),
            thresholds: ComparisonThresholds::default(),
            profit_loss: ProfitLossPolicy::default(),
            optimization: OptimizationPolicy::default(),
        }
    }
}

// ==================== Rounding ====================

/// Granularity applied to projected monthly revenue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingGranularity {
    /// Nearest whole currency unit
    #[default]
    Unit,
    /// Nearest thousand
    Thousand,
}

impl RoundingGranularity {
    /// Round half away from zero to this granularity
    pub fn apply(&self, value: Decimal) -> Decimal {
        let strategy = RoundingStrategy::MidpointAwayFromZero;
        match self {
            Self::Unit => value.round_dp_with_strategy(0, strategy),
            Self::Thousand => {
                let thousand = Decimal::ONE_THOUSAND;
                (value / thousand).round_dp_with_strategy(0, strategy) * thousand
            }
        }
    }
}

impl FromStr for RoundingGranularity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unit" => Ok(Self::Unit),
            "thousand" => Ok(Self::Thousand),
            other => Err(AppError::config(format!(
                "Unknown rounding granularity '{other}', expected 'unit' or 'thousand'"
            ))),
        }
    }
}

// ==================== Seasonality ====================

/// Revenue multiplier per calendar month, January first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonalityTable([f64; 12]);

impl SeasonalityTable {
    pub const fn new(factors: [f64; 12]) -> Self {
        Self(factors)
    }

    /// Every month at the same factor
    pub const fn uniform(factor: f64) -> Self {
        Self([factor; 12])
    }

    /// Replace the factor of one calendar month (1-12)
    pub fn with_month(mut self, month: u32, factor: f64) -> AppResult<Self> {
        let index = Self::index(month)?;
        if !factor.is_finite() || factor < 0.0 {
            return Err(AppError::config(format!(
                "Seasonal factor must be a non-negative number, got {factor}"
            )));
        }
        self.0[index] = factor;
        Ok(self)
    }

    /// Factor for a calendar month (1-12); unknown months are neutral
    pub fn factor(&self, month: u32) -> f64 {
        Self::index(month).map(|i| self.0[i]).unwrap_or(1.0)
    }

    fn index(month: u32) -> AppResult<usize> {
        match month {
            1..=12 => Ok(month as usize - 1),
            _ => Err(AppError::config(format!(
                "Month must be between 1 and 12, got {month}"
            ))),
        }
    }
}

impl Default for SeasonalityTable {
    fn default() -> Self {
        Self([
            0.95, 0.97, 1.0, 1.02, 1.03, 1.05, 1.07, 1.05, 1.0, 0.98, 1.02, 1.1,
        ])
    }
}

// ==================== Staffing policy ====================

/// Headcount rule driven by seating capacity
///
/// `covers_per_staff = None` is a flat rule: exactly `minimum` people
/// whenever the outlet has seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverRule {
    pub covers_per_staff: Option<u32>,
    pub minimum: u32,
}

impl CoverRule {
    pub const fn per_covers(covers_per_staff: u32, minimum: u32) -> Self {
        Self {
            covers_per_staff: Some(covers_per_staff),
            minimum,
        }
    }

    pub const fn flat(count: u32) -> Self {
        Self {
            covers_per_staff: None,
            minimum: count,
        }
    }

    /// Headcount for a seating capacity; 0 when there are no seats
    pub fn headcount(&self, seating_capacity: u32) -> u32 {
        if seating_capacity == 0 {
            return 0;
        }
        match self.covers_per_staff {
            Some(0) | None => self.minimum,
            Some(per) => seating_capacity.div_ceil(per).max(self.minimum),
        }
    }

    /// Human-readable formula
    pub fn describe(&self) -> String {
        match self.covers_per_staff {
            Some(per) if per > 0 => format!("1 per {per} covers (min {})", self.minimum),
            _ => format!("Fixed at {}", self.minimum),
        }
    }
}

/// Kitchen lookups for one service style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KitchenProfile {
    /// Stations one line cook can cover
    pub stations_per_chef: f64,
    pub sous_chefs: u32,
}

/// Kitchen lookups keyed by service style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KitchenRules {
    pub fast_casual: KitchenProfile,
    pub casual_dining: KitchenProfile,
    pub premium_dining: KitchenProfile,
}

impl KitchenRules {
    pub fn for_style(&self, style: ServiceStyle) -> KitchenProfile {
        match style {
            ServiceStyle::FastCasual => self.fast_casual,
            ServiceStyle::CasualDining => self.casual_dining,
            ServiceStyle::PremiumDining => self.premium_dining,
        }
    }
}

impl Default for KitchenRules {
    fn default() -> Self {
        Self {
            fast_casual: KitchenProfile {
                stations_per_chef: 2.0,
                sous_chefs: 0,
            },
            casual_dining: KitchenProfile {
                stations_per_chef: 1.5,
                sous_chefs: 1,
            },
            premium_dining: KitchenProfile {
                stations_per_chef: 1.0,
                sous_chefs: 2,
            },
        }
    }
}

/// Headcount rules used by the staffing calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingPolicy {
    pub hosts: CoverRule,
    pub cashiers: CoverRule,
    pub general_managers: CoverRule,
    pub assistant_managers: CoverRule,
    pub shift_supervisors: CoverRule,
    pub kitchen: KitchenRules,
    /// Prep cooks per line cook
    pub prep_cooks_per_line_cook: f64,
    /// Kitchen helpers per line cook
    pub helpers_per_line_cook: f64,
    pub covers_per_dishwasher: u32,
}

impl Default for StaffingPolicy {
    fn default() -> Self {
        Self {
            hosts: CoverRule::per_covers(50, 1),
            cashiers: CoverRule::per_covers(75, 1),
            general_managers: CoverRule::flat(1),
            assistant_managers: CoverRule::per_covers(150, 1),
            shift_supervisors: CoverRule::per_covers(75, 2),
            kitchen: KitchenRules::default(),
            prep_cooks_per_line_cook: 0.75,
            helpers_per_line_cook: 0.5,
            covers_per_dishwasher: 80,
        }
    }
}

// ==================== Comparison ====================

/// Minimum absolute differences that produce a comparison highlight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonThresholds {
    pub staff: u32,
    /// Percentage points
    pub labor_percentage: f64,
    /// Revenue per labor hour
    pub efficiency: f64,
}

impl Default for ComparisonThresholds {
    fn default() -> Self {
        Self {
            staff: 1,
            labor_percentage: 1.0,
            efficiency: 10.0,
        }
    }
}

// ==================== Profit and loss ====================

/// Operating cost lines as percentages of monthly revenue, and the margin
/// bands the P&L insights are graded against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossPolicy {
    pub food_cost_percentage: f64,
    pub rent_percentage: f64,
    pub utilities_percentage: f64,
    pub marketing_percentage: f64,
    pub other_percentage: f64,
    /// Profit margin (%) below which the statement is flagged
    pub minimum_margin: f64,
    /// Profit margin (%) above which the statement is called strong
    pub target_margin: f64,
    /// Share of total costs (%) above which a cost line is flagged
    pub high_cost_share: f64,
}

impl Default for ProfitLossPolicy {
    fn default() -> Self {
        Self {
            food_cost_percentage: 30.0,
            rent_percentage: 8.0,
            utilities_percentage: 5.0,
            marketing_percentage: 3.0,
            other_percentage: 10.0,
            minimum_margin: 10.0,
            target_margin: 15.0,
            high_cost_share: 40.0,
        }
    }
}

// ==================== Staffing optimization ====================

/// Rules of the staffing optimizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationPolicy {
    /// Buffer (%) trimmed from every staffed position
    pub buffer_percentage: f64,
    /// Floor per staffed position
    pub min_per_position: u32,
    /// Ceiling per position
    pub max_per_position: u32,
    /// Side reduction (%) reported as significant
    pub significant_reduction: f64,
}

impl Default for OptimizationPolicy {
    fn default() -> Self {
        Self {
            buffer_percentage: 15.0,
            min_per_position: 1,
            max_per_position: 20,
            significant_reduction: 10.0,
        }
    }
}

// ==================== Logging ====================

/// Logging configuration
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | LOG_LEVEL | info | Default filter when `RUST_LOG` is unset |
/// | LOG_JSON | false | JSON output instead of pretty output |
/// | LOG_DIR | (unset) | Directory for daily rotated log files |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
    pub dir: Option<String>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
