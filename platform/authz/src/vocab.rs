//! Closed vocabularies for roles, modules and actions.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Accountant,
    Sales,
    Warehouse,
}

impl Role {
    pub const COUNT: usize = 4;
    pub const ALL: [Role; Self::COUNT] = [
        Role::Admin,
        Role::Accountant,
        Role::Sales,
        Role::Warehouse,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Accountant => "accountant",
            Role::Sales => "sales",
            Role::Warehouse => "warehouse",
        }
    }

    /// Exact, case-sensitive lookup. Anything else is not a role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "accountant" => Some(Role::Accountant),
            "sales" => Some(Role::Sales),
            "warehouse" => Some(Role::Warehouse),
            _ => None,
        }
    }

    /// Display label shown in the Arabic UI.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "مدير",
            Role::Accountant => "محاسب",
            Role::Sales => "مبيعات",
            Role::Warehouse => "مخزن",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Customers,
    Inventory,
    Contracts,
    Payments,
    Reports,
    Settings,
    Users,
    AutoDebit,
}

impl Module {
    pub const COUNT: usize = 8;
    pub const ALL: [Module; Self::COUNT] = [
        Module::Customers,
        Module::Inventory,
        Module::Contracts,
        Module::Payments,
        Module::Reports,
        Module::Settings,
        Module::Users,
        Module::AutoDebit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Module::Customers => "customers",
            Module::Inventory => "inventory",
            Module::Contracts => "contracts",
            Module::Payments => "payments",
            Module::Reports => "reports",
            Module::Settings => "settings",
            Module::Users => "users",
            Module::AutoDebit => "auto_debit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "customers" => Some(Module::Customers),
            "inventory" => Some(Module::Inventory),
            "contracts" => Some(Module::Contracts),
            "payments" => Some(Module::Payments),
            "reports" => Some(Module::Reports),
            "settings" => Some(Module::Settings),
            "users" => Some(Module::Users),
            "auto_debit" => Some(Module::AutoDebit),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Add,
    Edit,
    Delete,
    Export,
    Execute,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::View,
        Action::Add,
        Action::Edit,
        Action::Delete,
        Action::Export,
        Action::Execute,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Add => "add",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Export => "export",
            Action::Execute => "execute",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "view" => Some(Action::View),
            "add" => Some(Action::Add),
            "edit" => Some(Action::Edit),
            "delete" => Some(Action::Delete),
            "export" => Some(Action::Export),
            "execute" => Some(Action::Execute),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_parse() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        for module in Module::ALL {
            assert_eq!(Module::parse(module.as_str()), Some(module));
        }
        for action in Action::ALL {
            assert_eq!(Action::parse(action.as_str()), Some(action));
        }
    }

    #[test]
    fn parse_is_case_sensitive_and_untrimmed() {
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(" admin"), None);
        assert_eq!(Module::parse("auto-debit"), None);
        assert_eq!(Action::parse(""), None);
    }

    #[test]
    fn serde_uses_snake_case_identifiers() {
        let json = serde_json::to_string(&Module::AutoDebit).unwrap();
        assert_eq!(json, "\"auto_debit\"");
        let role: Role = serde_json::from_str("\"warehouse\"").unwrap();
        assert_eq!(role, Role::Warehouse);
    }

    #[test]
    fn every_role_has_a_label() {
        assert!(Role::ALL.iter().all(|role| !role.label().is_empty()));
        assert_eq!(Role::Accountant.label(), "محاسب");
    }
}
