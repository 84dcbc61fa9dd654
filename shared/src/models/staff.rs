//! Staff Detail Model
//!
//! Named roles produced by the staffing calculator and their headcounts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::position::ids;

/// Role produced by the staffing calculator
///
/// Each role maps to exactly one catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Servers,
    Runners,
    Hosts,
    Cashiers,
    GeneralManagers,
    AssistantManagers,
    ShiftSupervisors,
    ExecutiveChefs,
    SousChefs,
    LineCooks,
    PrepCooks,
    KitchenHelpers,
    Dishwashers,
}

impl StaffRole {
    pub const ALL: [StaffRole; 13] = [
        StaffRole::Servers,
        StaffRole::Runners,
        StaffRole::Hosts,
        StaffRole::Cashiers,
        StaffRole::GeneralManagers,
        StaffRole::AssistantManagers,
        StaffRole::ShiftSupervisors,
        StaffRole::ExecutiveChefs,
        StaffRole::SousChefs,
        StaffRole::LineCooks,
        StaffRole::PrepCooks,
        StaffRole::KitchenHelpers,
        StaffRole::Dishwashers,
    ];

    /// Catalog position this role is paid as
    pub fn position_id(&self) -> &'static str {
        match self {
            Self::Servers => ids::SERVER,
            Self::Runners => ids::RUNNER,
            Self::Hosts => ids::HOST,
            Self::Cashiers => ids::CASHIER,
            Self::GeneralManagers => ids::GENERAL_MANAGER,
            Self::AssistantManagers => ids::ASSISTANT_MANAGER,
            Self::ShiftSupervisors => ids::SHIFT_SUPERVISOR,
            Self::ExecutiveChefs => ids::EXECUTIVE_CHEF,
            Self::SousChefs => ids::SOUS_CHEF,
            Self::LineCooks => ids::LINE_COOK,
            Self::PrepCooks => ids::PREP_COOK,
            Self::KitchenHelpers => ids::KITCHEN_HELPER,
            Self::Dishwashers => ids::DISHWASHER,
        }
    }

    /// Reverse of [`StaffRole::position_id`]
    pub fn from_position_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.position_id() == id)
    }

    /// Kitchen roles are back of house
    pub fn is_kitchen(&self) -> bool {
        matches!(
            self,
            Self::ExecutiveChefs
                | Self::SousChefs
                | Self::LineCooks
                | Self::PrepCooks
                | Self::KitchenHelpers
                | Self::Dishwashers
        )
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Servers => "Servers",
            Self::Runners => "Runners",
            Self::Hosts => "Hosts",
            Self::Cashiers => "Cashiers",
            Self::GeneralManagers => "General Managers",
            Self::AssistantManagers => "Assistant Managers",
            Self::ShiftSupervisors => "Shift Supervisors",
            Self::ExecutiveChefs => "Executive Chefs",
            Self::SousChefs => "Sous Chefs",
            Self::LineCooks => "Line Cooks",
            Self::PrepCooks => "Prep Cooks",
            Self::KitchenHelpers => "Kitchen Helpers",
            Self::Dishwashers => "Dishwashers",
        }
    }
}

/// Headcount per role (role -> count)
///
/// Ordered so iteration and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffDetail(BTreeMap<StaffRole, u32>);

impl StaffDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, role: StaffRole, count: u32) {
        self.0.insert(role, count);
    }

    /// Count for a role; absent roles count as 0
    pub fn get(&self, role: StaffRole) -> u32 {
        self.0.get(&role).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StaffRole, u32)> + '_ {
        self.0.iter().map(|(role, count)| (*role, *count))
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

impl FromIterator<(StaffRole, u32)> for StaffDetail {
    fn from_iter<I: IntoIterator<Item = (StaffRole, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_id_roundtrip() {
        for role in StaffRole::ALL {
            assert_eq!(StaffRole::from_position_id(role.position_id()), Some(role));
        }
        assert_eq!(StaffRole::from_position_id("pos-999"), None);
    }

    #[test]
    fn test_kitchen_roles() {
        assert!(StaffRole::Dishwashers.is_kitchen());
        assert!(!StaffRole::ShiftSupervisors.is_kitchen());
        assert_eq!(StaffRole::ALL.iter().filter(|r| r.is_kitchen()).count(), 6);
    }

    #[test]
    fn test_missing_role_counts_as_zero() {
        let detail: StaffDetail = [(StaffRole::Servers, 9), (StaffRole::Runners, 5)]
            .into_iter()
            .collect();
        assert_eq!(detail.get(StaffRole::Hosts), 0);
        assert_eq!(detail.total(), 14);
    }

    #[test]
    fn test_serializes_as_role_map() {
        let mut detail = StaffDetail::new();
        detail.set(StaffRole::ExecutiveChefs, 1);
        detail.set(StaffRole::LineCooks, 4);
        let json = serde_json::to_string(&detail).unwrap();
        assert_eq!(json, r#"{"executive_chefs":1,"line_cooks":4}"#);
    }
}
