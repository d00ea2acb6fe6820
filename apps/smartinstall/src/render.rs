use std::fmt::Write as _;

use platform_authz::{Module, PermissionMatrix, Role};
use platform_config::Settings;

pub fn roles() -> String {
    let mut out = String::new();
    for role in Role::ALL {
        let _ = writeln!(out, "{:<12} {}", role.as_str(), role.label());
    }
    out
}

/// One row per role and module; empty cells render as `-`.
pub fn matrix_table(matrix: &PermissionMatrix) -> String {
    let mut out = String::new();
    for role in Role::ALL {
        let _ = writeln!(out, "{role}");
        for module in Module::ALL {
            let actions = matrix.actions(role, module);
            let cell = if actions.is_empty() {
                "-".to_string()
            } else {
                actions
                    .iter()
                    .map(|action| action.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let _ = writeln!(out, "  {:<12} {cell}", module.as_str());
        }
    }
    out
}

pub fn settings_summary(settings: &Settings) -> String {
    let mut out = String::new();
    let app = &settings.app;
    let db = &settings.database;
    let paths = &settings.paths;
    let _ = writeln!(out, "application: {} v{}", app.name, app.version);
    let _ = writeln!(out, "description: {}", app.description);
    let _ = writeln!(out, "language:    {} ({:?})", app.language, app.text_direction);
    let _ = writeln!(out, "database:    {}@{}:{}/{}", db.user, db.host, db.port, db.name);
    let _ = writeln!(out, "log level:   {:?}", settings.logging.level);
    let _ = writeln!(out, "base:        {}", paths.base_dir.display());
    let _ = writeln!(out, "resources:   {}", paths.resources_dir.display());
    let _ = writeln!(out, "exports:     {}", paths.export_dir.display());
    let _ = writeln!(out, "backups:     {}", paths.backup_dir.display());
    let _ = writeln!(out, "roles:");
    for role in Role::ALL {
        let _ = writeln!(out, "  - {}: {}", role.as_str(), role.label());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_table_marks_empty_cells() {
        let table = matrix_table(PermissionMatrix::standard());
        assert!(table.contains("warehouse\n  customers    -\n"));
        assert!(table.contains("  payments     view, add, edit\n"));
    }

    #[test]
    fn summary_never_prints_the_password() {
        let mut settings = Settings::rooted_at("/srv/smartinstall");
        settings.database.password = "pg-secret".into();
        let summary = settings_summary(&settings);
        assert!(!summary.contains("pg-secret"));
        assert!(summary.contains("postgres@localhost:5432/smartinstall_db"));
        assert!(summary.contains("  - sales: مبيعات"));
    }
}
