//! Shared fixtures for the cross-crate suites.

use platform_authz::{Action, Module, Role};

/// Hand-written copy of the shipped permission table. Tests compare the
/// engine against this, so edits to the matrix must be mirrored here.
pub const GOLDEN: &[(&str, &str, &[&str])] = &[
    ("admin", "customers", &["view", "add", "edit", "delete"]),
    ("admin", "inventory", &["view", "add", "edit", "delete"]),
    ("admin", "contracts", &["view", "add", "edit", "delete"]),
    ("admin", "payments", &["view", "add", "edit", "delete"]),
    ("admin", "reports", &["view", "export"]),
    ("admin", "settings", &["view", "edit"]),
    ("admin", "users", &["view", "add", "edit", "delete"]),
    ("admin", "auto_debit", &["view", "execute"]),
    ("accountant", "customers", &["view"]),
    ("accountant", "inventory", &["view"]),
    ("accountant", "contracts", &["view"]),
    ("accountant", "payments", &["view", "add", "edit"]),
    ("accountant", "reports", &["view", "export"]),
    ("accountant", "settings", &["view"]),
    ("accountant", "users", &[]),
    ("accountant", "auto_debit", &["view", "execute"]),
    ("sales", "customers", &["view", "add", "edit"]),
    ("sales", "inventory", &["view"]),
    ("sales", "contracts", &["view", "add"]),
    ("sales", "payments", &["view"]),
    ("sales", "reports", &[]),
    ("sales", "settings", &[]),
    ("sales", "users", &[]),
    ("sales", "auto_debit", &[]),
    ("warehouse", "customers", &[]),
    ("warehouse", "inventory", &["view", "add", "edit"]),
    ("warehouse", "contracts", &[]),
    ("warehouse", "payments", &[]),
    ("warehouse", "reports", &[]),
    ("warehouse", "settings", &[]),
    ("warehouse", "users", &[]),
    ("warehouse", "auto_debit", &[]),
];

pub fn golden_allows(role: &str, module: &str, action: &str) -> bool {
    GOLDEN
        .iter()
        .any(|(r, m, actions)| *r == role && *m == module && actions.contains(&action))
}

/// Every role x module x action combination of the known vocabulary.
pub fn vocabulary() -> impl Iterator<Item = (Role, Module, Action)> {
    Role::ALL.into_iter().flat_map(|role| {
        Module::ALL.into_iter().flat_map(move |module| {
            Action::ALL
                .into_iter()
                .map(move |action| (role, module, action))
        })
    })
}
