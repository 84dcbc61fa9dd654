//! Core module - engine configuration

pub mod config;

pub use config::{
    ComparisonThresholds, CoverRule, EngineConfig, KitchenProfile, KitchenRules, LogConfig,
    OptimizationPolicy, ProfitLossPolicy, RoundingGranularity, SeasonalityTable, StaffingPolicy,
};
