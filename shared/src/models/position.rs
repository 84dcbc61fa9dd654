//! Position Model
//!
//! Reference data: the staffing positions and their cost attributes.
//! Never mutated at runtime.

use serde::{Deserialize, Serialize};

/// Position category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionCategory {
    #[serde(rename = "FOH")]
    Foh,
    #[serde(rename = "BOH")]
    Boh,
    Management,
}

impl PositionCategory {
    /// Side of the house used for the FOH/BOH split.
    ///
    /// Management runs the floor, so it is counted as front of house.
    pub fn is_front_of_house(&self) -> bool {
        matches!(self, Self::Foh | Self::Management)
    }
}

/// Catalog position IDs
pub mod ids {
    pub const SERVER: &str = "pos-001";
    pub const RUNNER: &str = "pos-002";
    pub const HOST: &str = "pos-003";
    pub const CASHIER: &str = "pos-004";
    pub const EXECUTIVE_CHEF: &str = "pos-005";
    pub const SOUS_CHEF: &str = "pos-006";
    pub const LINE_COOK: &str = "pos-007";
    pub const PREP_COOK: &str = "pos-008";
    pub const KITCHEN_HELPER: &str = "pos-009";
    pub const DISHWASHER: &str = "pos-010";
    pub const GENERAL_MANAGER: &str = "pos-011";
    pub const ASSISTANT_MANAGER: &str = "pos-012";
    pub const SHIFT_SUPERVISOR: &str = "pos-013";
}

/// Staffing position with monthly pay and periodic costs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub name: String,
    pub category: PositionCategory,
    /// Monthly base salary
    pub base_salary: f64,
    /// Monthly variable pay
    pub variable_pay: f64,
    /// Monthly benefits
    pub benefits: f64,
    /// One-time training cost per hire
    pub training_cost: f64,
    /// One-time recruitment cost per hire
    pub recruitment_cost: f64,
    /// Monthly meal allowance
    pub meal_cost: f64,
    /// Annual turnover rate (0-1)
    pub turnover_rate: f64,
}

impl Position {
    #[allow(clippy::too_many_arguments)]
    fn catalog_entry(
        id: &str,
        name: &str,
        category: PositionCategory,
        base_salary: f64,
        variable_pay: f64,
        benefits: f64,
        training_cost: f64,
        recruitment_cost: f64,
        turnover_rate: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            base_salary,
            variable_pay,
            benefits,
            training_cost,
            recruitment_cost,
            meal_cost: 200.0,
            turnover_rate,
        }
    }

    /// Recurring monthly cost of one person in this position
    pub fn monthly_rate(&self) -> f64 {
        self.base_salary + self.variable_pay + self.benefits
    }
}

/// The default position catalog
pub fn default_catalog() -> Vec<Position> {
    use PositionCategory::*;
    vec![
        Position::catalog_entry(ids::SERVER, "Server/Waiter", Foh, 4000.0, 500.0, 800.0, 300.0, 500.0, 0.25),
        Position::catalog_entry(ids::RUNNER, "Runner/Busser", Foh, 3200.0, 300.0, 600.0, 200.0, 400.0, 0.3),
        Position::catalog_entry(ids::HOST, "Host/Hostess", Foh, 3500.0, 400.0, 700.0, 250.0, 450.0, 0.2),
        Position::catalog_entry(ids::CASHIER, "Cashier", Foh, 3800.0, 300.0, 750.0, 250.0, 400.0, 0.15),
        Position::catalog_entry(ids::EXECUTIVE_CHEF, "Executive Chef", Boh, 12000.0, 2000.0, 2400.0, 1500.0, 3000.0, 0.1),
        Position::catalog_entry(ids::SOUS_CHEF, "Sous Chef", Boh, 8000.0, 1000.0, 1600.0, 1000.0, 2000.0, 0.15),
        Position::catalog_entry(ids::LINE_COOK, "Line Cook", Boh, 5000.0, 700.0, 1000.0, 600.0, 800.0, 0.25),
        Position::catalog_entry(ids::PREP_COOK, "Prep Cook", Boh, 4500.0, 500.0, 900.0, 500.0, 700.0, 0.3),
        Position::catalog_entry(ids::KITCHEN_HELPER, "Kitchen Helper", Boh, 3500.0, 300.0, 700.0, 300.0, 500.0, 0.35),
        Position::catalog_entry(ids::DISHWASHER, "Dishwasher", Boh, 3000.0, 200.0, 600.0, 200.0, 400.0, 0.4),
        Position::catalog_entry(ids::GENERAL_MANAGER, "General Manager", Management, 15000.0, 3000.0, 3000.0, 2000.0, 5000.0, 0.1),
        Position::catalog_entry(ids::ASSISTANT_MANAGER, "Assistant Manager", Management, 10000.0, 1500.0, 2000.0, 1500.0, 3000.0, 0.15),
        Position::catalog_entry(ids::SHIFT_SUPERVISOR, "Shift Supervisor", Management, 7000.0, 1000.0, 1400.0, 1000.0, 1500.0, 0.2),
    ]
}

/// Look up a position by ID
pub fn find_position<'a>(positions: &'a [Position], id: &str) -> Option<&'a Position> {
    positions.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_ids_are_unique() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 13);
        let mut ids: Vec<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 13);
    }

    #[test]
    fn test_monthly_rate_excludes_one_time_costs() {
        let catalog = default_catalog();
        let server = find_position(&catalog, ids::SERVER).unwrap();
        assert_eq!(server.monthly_rate(), 5300.0);
    }

    #[test]
    fn test_management_counts_as_front_of_house() {
        assert!(PositionCategory::Management.is_front_of_house());
        assert!(PositionCategory::Foh.is_front_of_house());
        assert!(!PositionCategory::Boh.is_front_of_house());
    }

    #[test]
    fn test_category_serde_names() {
        assert_eq!(serde_json::to_string(&PositionCategory::Foh).unwrap(), "\"FOH\"");
        assert_eq!(
            serde_json::from_str::<PositionCategory>("\"Management\"").unwrap(),
            PositionCategory::Management
        );
    }
}
