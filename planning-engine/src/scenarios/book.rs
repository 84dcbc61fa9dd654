//! Scenario book
//!
//! In-memory, single-owner store of scenarios. Every mutation of parameters
//! triggers a full recalculation; derived values are never edited directly.

use chrono::Utc;
use shared::models::{
    ParameterSet, Position, Scenario, ScenarioComparison, ScenarioCreate, ScenarioUpdate,
    default_catalog,
};
use shared::util::new_scenario_id;
use shared::{AppError, AppResult, ErrorCode};
use std::collections::HashMap;

use crate::calc::{
    CalculationCache, EfficiencyReport, OneTimeCosts, OptimizationConstraints, PeakHourAnalysis,
    ProfitLossStatement, RevenueProjection, StaffingOptimization, WhatIfAdjustments, WhatIfResult,
    analyze_peak_hours, analyze_what_if, apply_processed, calculate_one_time_costs,
    calculate_profit_loss, compare_scenarios_with, efficiency_report, optimize_staffing,
    project_revenue,
};
use crate::calc::revenue::revenue_inputs;
use crate::core::EngineConfig;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_engine_config, validate_parameter_set, validate_position_catalog,
    validate_required_text,
};

/// Scenarios keyed by ID, plus the catalog and config they are computed with
#[derive(Debug)]
pub struct ScenarioBook {
    scenarios: HashMap<String, Scenario>,
    positions: Vec<Position>,
    config: EngineConfig,
    cache: CalculationCache,
}

impl ScenarioBook {
    /// Empty book using the default position catalog
    pub fn new(config: EngineConfig) -> AppResult<Self> {
        Self::with_catalog(default_catalog(), config)
    }

    /// Empty book with a custom catalog
    ///
    /// The catalog must cover every staffed role (`PositionNotFound`
    /// otherwise) and both catalog costs and config are range-checked.
    pub fn with_catalog(positions: Vec<Position>, config: EngineConfig) -> AppResult<Self> {
        validate_position_catalog(&positions)?;
        validate_engine_config(&config)?;
        Ok(Self::build(positions, config))
    }

    fn build(positions: Vec<Position>, config: EngineConfig) -> Self {
        Self {
            scenarios: HashMap::new(),
            positions,
            config,
            cache: CalculationCache::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn cache(&self) -> &CalculationCache {
        &self.cache
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    // ==================== Queries ====================

    pub fn find_by_id(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.get(id)
    }

    /// Scenario by ID, `ScenarioNotFound` when missing
    pub fn get(&self, id: &str) -> AppResult<&Scenario> {
        self.scenarios
            .get(id)
            .ok_or_else(|| AppError::scenario_not_found(id))
    }

    /// Scenarios of an outlet, oldest first
    pub fn find_by_outlet(&self, outlet_id: &str) -> Vec<&Scenario> {
        let mut found: Vec<&Scenario> = self
            .scenarios
            .values()
            .filter(|s| s.outlet_id == outlet_id)
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        found
    }

    // ==================== Mutations ====================

    /// Create a scenario from explicit parameters or the style preset
    pub fn create(&mut self, data: ScenarioCreate) -> AppResult<Scenario> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.outlet_id, "outlet_id", MAX_NAME_LEN)?;
        self.ensure_unique_name(&data.outlet_id, &data.name, None)?;

        let parameters = data.resolved_parameters();
        validate_parameter_set(&parameters)?;

        let now = Utc::now();
        let mut scenario = Scenario {
            id: new_scenario_id(),
            name: data.name,
            outlet_id: data.outlet_id,
            created_at: now,
            updated_at: now,
            parameters,
            staffing_requirements: Vec::new(),
            calculations: Default::default(),
        };
        self.apply_calculations(&mut scenario)?;

        tracing::info!(
            scenario_id = %scenario.id,
            outlet_id = %scenario.outlet_id,
            name = %scenario.name,
            "Scenario created"
        );
        self.scenarios.insert(scenario.id.clone(), scenario.clone());
        Ok(scenario)
    }

    /// Copy a scenario under a new ID and name
    pub fn duplicate(&mut self, id: &str, new_name: Option<String>) -> AppResult<Scenario> {
        let source = self.get(id)?;
        let name = new_name.unwrap_or_else(|| format!("{} (Copy)", source.name));
        let data = ScenarioCreate {
            name,
            outlet_id: source.outlet_id.clone(),
            service_style: source.parameters.service.service_style,
            parameters: Some(source.parameters.clone()),
        };
        let copy = self.create(data)?;
        tracing::info!(source_id = %id, scenario_id = %copy.id, "Scenario duplicated");
        Ok(copy)
    }

    /// Rename and/or replace parameters, then recalculate
    pub fn update(&mut self, id: &str, data: ScenarioUpdate) -> AppResult<Scenario> {
        let existing = self.get(id)?;
        let outlet_id = existing.outlet_id.clone();

        if let Some(ref name) = data.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
            self.ensure_unique_name(&outlet_id, name, Some(id))?;
        }
        if let Some(ref parameters) = data.parameters {
            validate_parameter_set(parameters)?;
        }

        let mut scenario = self.get(id)?.clone();
        if let Some(name) = data.name {
            scenario.name = name;
        }
        if let Some(parameters) = data.parameters {
            scenario.parameters = parameters;
        }
        self.apply_calculations(&mut scenario)?;

        tracing::info!(scenario_id = %id, "Scenario updated");
        self.scenarios.insert(scenario.id.clone(), scenario.clone());
        Ok(scenario)
    }

    /// Replace only the parameters
    pub fn update_parameters(&mut self, id: &str, parameters: ParameterSet) -> AppResult<Scenario> {
        self.update(
            id,
            ScenarioUpdate {
                name: None,
                parameters: Some(parameters),
            },
        )
    }

    /// Remove a scenario, returning it
    pub fn delete(&mut self, id: &str) -> AppResult<Scenario> {
        let removed = self
            .scenarios
            .remove(id)
            .ok_or_else(|| AppError::scenario_not_found(id))?;

        let shared_parameters = self
            .scenarios
            .values()
            .any(|s| s.parameters == removed.parameters);
        if !shared_parameters {
            self.cache
                .evict(&removed.parameters, &self.positions, &self.config)?;
        }
        tracing::info!(scenario_id = %id, "Scenario deleted");
        Ok(removed)
    }

    // ==================== Analysis ====================

    /// Compare two stored scenarios (`compare - base`)
    pub fn compare(&self, base_id: &str, compare_id: &str) -> AppResult<ScenarioComparison> {
        let base = self.get(base_id)?;
        let compare = self.get(compare_id)?;
        Ok(compare_scenarios_with(base, compare, &self.positions, &self.config))
    }

    pub fn what_if(&self, id: &str, adjustments: &WhatIfAdjustments) -> AppResult<WhatIfResult> {
        analyze_what_if(&self.get(id)?.calculations, adjustments)
    }

    pub fn peak_hours(&self, id: &str) -> AppResult<PeakHourAnalysis> {
        let scenario = self.get(id)?;
        Ok(analyze_peak_hours(&scenario.parameters, &scenario.calculations))
    }

    pub fn efficiency(&self, id: &str) -> AppResult<EfficiencyReport> {
        let scenario = self.get(id)?;
        Ok(efficiency_report(&scenario.parameters, &scenario.calculations, &self.config))
    }

    pub fn one_time_costs(&self, id: &str) -> AppResult<OneTimeCosts> {
        let scenario = self.get(id)?;
        Ok(calculate_one_time_costs(&scenario.calculations.staff_detail, &self.positions))
    }

    pub fn revenue_projection(&self, id: &str) -> AppResult<RevenueProjection> {
        let params = &self.get(id)?.parameters;
        let inputs = revenue_inputs(&params.space, &params.revenue, &params.operational);
        Ok(project_revenue(&inputs, &self.config))
    }

    pub fn profit_loss(&self, id: &str) -> AppResult<ProfitLossStatement> {
        let scenario = self.get(id)?;
        Ok(calculate_profit_loss(&scenario.calculations, &self.config.profit_loss))
    }

    pub fn optimize_staffing(
        &self,
        id: &str,
        constraints: &OptimizationConstraints,
    ) -> AppResult<StaffingOptimization> {
        let scenario = self.get(id)?;
        Ok(optimize_staffing(
            &scenario.calculations.staff_detail,
            &self.positions,
            &self.config.optimization,
            constraints,
        ))
    }

    // ==================== Internals ====================

    fn apply_calculations(&self, scenario: &mut Scenario) -> AppResult<()> {
        let processed = self
            .cache
            .get_or_compute(&scenario.parameters, &self.positions, &self.config)?;
        apply_processed(scenario, processed);
        Ok(())
    }

    fn ensure_unique_name(&self, outlet_id: &str, name: &str, except_id: Option<&str>) -> AppResult<()> {
        let taken = self.scenarios.values().any(|s| {
            s.outlet_id == outlet_id
                && s.name.eq_ignore_ascii_case(name.trim())
                && Some(s.id.as_str()) != except_id
        });
        if taken {
            return Err(AppError::with_message(
                ErrorCode::ScenarioNameExists,
                format!("Scenario '{}' already exists for outlet {}", name, outlet_id),
            )
            .with_detail("name", name)
            .with_detail("outlet_id", outlet_id));
        }
        Ok(())
    }
}

impl Default for ScenarioBook {
    fn default() -> Self {
        Self::build(default_catalog(), EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ServiceStyle;

    fn create(book: &mut ScenarioBook, name: &str, style: ServiceStyle) -> Scenario {
        book.create(ScenarioCreate {
            name: name.to_string(),
            outlet_id: "outlet-1".to_string(),
            service_style: style,
            parameters: None,
        })
        .unwrap()
    }

    #[test]
    fn test_create_computes_calculations() {
        let mut book = ScenarioBook::default();
        let scenario = create(&mut book, "Baseline", ServiceStyle::CasualDining);
        assert!(scenario.calculations.total_staff > 0);
        assert!(!scenario.staffing_requirements.is_empty());
        assert_eq!(book.get(&scenario.id).unwrap(), &scenario);
    }

    #[test]
    fn test_create_rejects_duplicate_name_in_outlet() {
        let mut book = ScenarioBook::default();
        create(&mut book, "Baseline", ServiceStyle::CasualDining);
        let err = book
            .create(ScenarioCreate {
                name: "baseline".to_string(),
                outlet_id: "outlet-1".to_string(),
                service_style: ServiceStyle::FastCasual,
                parameters: None,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ScenarioNameExists);

        // Other outlets may reuse the name
        book.create(ScenarioCreate {
            name: "Baseline".to_string(),
            outlet_id: "outlet-2".to_string(),
            service_style: ServiceStyle::FastCasual,
            parameters: None,
        })
        .unwrap();
    }

    #[test]
    fn test_create_rejects_invalid_parameters() {
        let mut book = ScenarioBook::default();
        let mut params = ParameterSet::for_style(ServiceStyle::CasualDining);
        params.revenue.table_turn_time = 0.0;
        let err = book
            .create(ScenarioCreate {
                name: "Broken".to_string(),
                outlet_id: "outlet-1".to_string(),
                service_style: ServiceStyle::CasualDining,
                parameters: Some(params),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(book.is_empty());
    }

    #[test]
    fn test_duplicate_copies_parameters() {
        let mut book = ScenarioBook::default();
        let original = create(&mut book, "Baseline", ServiceStyle::PremiumDining);
        let copy = book.duplicate(&original.id, None).unwrap();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.name, "Baseline (Copy)");
        assert_eq!(copy.parameters, original.parameters);
        assert_eq!(copy.calculations, original.calculations);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_update_parameters_recalculates() {
        let mut book = ScenarioBook::default();
        let scenario = create(&mut book, "Baseline", ServiceStyle::CasualDining);

        let mut params = scenario.parameters.clone();
        params.space.external_seating += 40;
        let updated = book.update_parameters(&scenario.id, params).unwrap();

        assert_eq!(
            updated.calculations.seating_capacity,
            scenario.calculations.seating_capacity + 40
        );
        assert!(updated.calculations.total_staff >= scenario.calculations.total_staff);
        assert!(updated.updated_at >= scenario.updated_at);
        assert_eq!(updated.created_at, scenario.created_at);
    }

    #[test]
    fn test_missing_ids_are_scenario_not_found() {
        let mut book = ScenarioBook::default();
        let scenario = create(&mut book, "Baseline", ServiceStyle::CasualDining);

        assert_eq!(book.get("nope").unwrap_err().code, ErrorCode::ScenarioNotFound);
        assert_eq!(
            book.compare(&scenario.id, "nope").unwrap_err().code,
            ErrorCode::ScenarioNotFound
        );
        assert_eq!(book.delete("nope").unwrap_err().code, ErrorCode::ScenarioNotFound);

        book.delete(&scenario.id).unwrap();
        assert!(book.find_by_id(&scenario.id).is_none());
    }

    #[test]
    fn test_find_by_outlet_and_compare() {
        let mut book = ScenarioBook::default();
        let a = create(&mut book, "Casual", ServiceStyle::CasualDining);
        let b = create(&mut book, "Premium", ServiceStyle::PremiumDining);

        let listed = book.find_by_outlet("outlet-1");
        assert_eq!(listed.len(), 2);
        assert!(book.find_by_outlet("outlet-9").is_empty());

        let comparison = book.compare(&a.id, &b.id).unwrap();
        assert_eq!(comparison.base.name, "Casual");
        assert_eq!(comparison.compare.name, "Premium");
        assert_eq!(
            comparison.staff_diff,
            i64::from(b.calculations.total_staff) - i64::from(a.calculations.total_staff)
        );
    }

    #[test]
    fn test_analysis_shortcuts() {
        let mut book = ScenarioBook::default();
        let scenario = create(&mut book, "Baseline", ServiceStyle::FastCasual);

        let what_if = book.what_if(&scenario.id, &WhatIfAdjustments::default()).unwrap();
        assert_eq!(what_if.profit_impact, 0.0);

        let peak = book.peak_hours(&scenario.id).unwrap();
        assert_eq!(peak.busiest_hour, Some(19));

        let costs = book.one_time_costs(&scenario.id).unwrap();
        assert!(costs.total > 0.0);

        let projection = book.revenue_projection(&scenario.id).unwrap();
        assert_eq!(projection.base_monthly, scenario.calculations.monthly_revenue);

        let report = book.efficiency(&scenario.id).unwrap();
        assert!(report.productive_hours > 0.0);
    }

    #[test]
    fn test_with_catalog_requires_every_role() {
        let catalog: Vec<Position> = default_catalog()
            .into_iter()
            .filter(|p| p.id != "pos-009")
            .collect();
        let err = ScenarioBook::with_catalog(catalog, EngineConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::PositionNotFound);

        let config = EngineConfig {
            days_per_month: 0,
            ..EngineConfig::default()
        };
        assert!(ScenarioBook::new(config).is_err());
        assert!(ScenarioBook::new(EngineConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_oversized_inputs_are_rejected_not_computed() {
        let mut book = ScenarioBook::default();
        for (area, spend) in [(1e28, 120.0), (1e30, 120.0), (300.0, 1e25)] {
            let mut params = ParameterSet::for_style(ServiceStyle::CasualDining);
            params.space.total_area = area;
            params.revenue.average_spend_per_guest = spend;
            let err = book
                .create(ScenarioCreate {
                    name: "Huge".to_string(),
                    outlet_id: "outlet-1".to_string(),
                    service_style: ServiceStyle::CasualDining,
                    parameters: Some(params),
                })
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        }
        assert!(book.is_empty());
        assert_eq!(book.cache().stats().misses, 0);
    }

    #[test]
    fn test_delete_evicts_cached_calculation() {
        let mut book = ScenarioBook::default();
        let a = create(&mut book, "Casual", ServiceStyle::CasualDining);
        let copy = book.duplicate(&a.id, None).unwrap();
        let b = create(&mut book, "Premium", ServiceStyle::PremiumDining);
        assert_eq!(book.cache().stats().entries, 2);

        // Still shared by the copy
        book.delete(&a.id).unwrap();
        assert_eq!(book.cache().stats().entries, 2);

        book.delete(&copy.id).unwrap();
        book.delete(&b.id).unwrap();
        assert_eq!(book.cache().stats().entries, 0);
    }

    #[test]
    fn test_profit_loss_and_optimization() {
        let mut book = ScenarioBook::default();
        let scenario = create(&mut book, "Baseline", ServiceStyle::CasualDining);

        let pl = book.profit_loss(&scenario.id).unwrap();
        assert_eq!(pl.revenue, scenario.calculations.monthly_revenue);
        assert_eq!(pl.labor_cost, scenario.calculations.labor_cost);
        assert!((pl.revenue - pl.total_costs - pl.profit).abs() < 0.01);

        let optimized = book
            .optimize_staffing(&scenario.id, &OptimizationConstraints::default())
            .unwrap();
        assert_eq!(optimized.current, scenario.calculations.staff_detail);
        assert!(optimized.optimized_headcount.total() <= scenario.calculations.total_staff);
        assert!(optimized.cost_savings >= 0.0);
        assert_eq!(
            book.optimize_staffing("nope", &OptimizationConstraints::default())
                .unwrap_err()
                .code,
            ErrorCode::ScenarioNotFound
        );
    }
}
