//! Startup settings for SmartInstall.
//!
//! Settings are plain records, loaded once by the binary and handed to the
//! components that need them. Nothing here runs on import: directory setup
//! happens only through [`initialize_environment`].

mod app;
mod paths;
mod reports;
mod ui;
mod validation;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use platform_db::DatabaseSettings;
use serde::Serialize;
use thiserror::Error;

pub use app::{AppSettings, LogLevel, LoggingSettings, SecuritySettings, TextDirection};
pub use paths::{PathsSettings, initialize_environment};
pub use reports::{AutoDebitSettings, BackupSettings, ExportFormat, Orientation, ReportSettings};
pub use ui::{
    FeatureFlags, NotificationKind, NotificationSettings, NotificationStyle, Palette,
    PreviewFeature, Theme, UiSettings,
};
pub use validation::ValidationRules;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid ENCRYPTION_KEY: {0}")]
    InvalidEncryptionKey(String),
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Clone, Debug, Serialize)]
pub struct Settings {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub security: SecuritySettings,
    pub paths: PathsSettings,
    pub logging: LoggingSettings,
    pub ui: UiSettings,
    pub features: FeatureFlags,
    pub reports: ReportSettings,
    pub auto_debit: AutoDebitSettings,
    pub backup: BackupSettings,
    pub notifications: NotificationSettings,
    pub validation: ValidationRules,
}

impl Settings {
    /// Defaults for an installation rooted at `base`.
    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        let paths = PathsSettings::rooted_at(base);
        let ui = UiSettings::new(&paths);
        Self {
            app: AppSettings::default(),
            database: DatabaseSettings::default(),
            security: SecuritySettings::default(),
            logging: LoggingSettings::new(paths.log_file.clone()),
            notifications: NotificationSettings::new(ui.palette),
            features: FeatureFlags::default(),
            reports: ReportSettings::new(&paths),
            auto_debit: AutoDebitSettings::default(),
            backup: BackupSettings::new(&paths),
            validation: ValidationRules::default(),
            ui,
            paths,
        }
    }

    /// Process environment layered over `./.env`.
    pub fn load() -> Result<Self> {
        Self::load_with_env_file(Path::new(".env"))
    }

    /// Process environment layered over the dotenv file at `path`. A
    /// missing file is the same as an empty one; the process environment
    /// is never modified.
    pub fn load_with_env_file(path: &Path) -> Result<Self> {
        let file = read_env_file(path)?;
        Self::from_lookup(layered(&file, |key| std::env::var(key).ok()))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup("SMARTINSTALL_HOME") {
            Some(home) => PathBuf::from(home),
            None => std::env::current_dir().context("cannot resolve working directory")?,
        };
        let mut settings = Self::rooted_at(base);

        settings.database =
            DatabaseSettings::from_lookup(&lookup).context("invalid database settings")?;

        if let Some(raw) = lookup("SMARTINSTALL_LOG_LEVEL") {
            settings.logging.level =
                LogLevel::parse(&raw).ok_or(ConfigError::InvalidLogLevel(raw))?;
        }
        if let Some(raw) = lookup("SMARTINSTALL_DEBUG") {
            settings.app.debug_mode = matches!(raw.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        settings.security.encryption_key = non_empty(lookup("ENCRYPTION_KEY"));
        if let Some(key) = &settings.security.encryption_key {
            SecuritySettings::validate_encryption_key(key)?;
        }
        settings.security.app_secret_key = non_empty(lookup("APP_SECRET_KEY"));

        Ok(settings)
    }
}

/// Parses a dotenv file. Returns no entries when the file does not exist.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(err) if err.not_found() => return Ok(HashMap::new()),
        Err(err) => {
            return Err(err).with_context(|| format!("cannot read {}", path.display()));
        }
    };
    entries
        .map(|entry| entry.with_context(|| format!("malformed line in {}", path.display())))
        .collect()
}

/// `primary` wins; `file` fills in keys it does not set.
fn layered<'a, F>(
    file: &'a HashMap<String, String>,
    primary: F,
) -> impl Fn(&str) -> Option<String> + 'a
where
    F: Fn(&str) -> Option<String> + 'a,
{
    move |key: &str| primary(key).or_else(|| file.get(key).cloned())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        Settings::from_lookup(|key| map.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn home_override_moves_every_path() {
        let settings = settings_from(&[("SMARTINSTALL_HOME", "/data/si")]).unwrap();
        assert_eq!(settings.paths.base_dir, PathBuf::from("/data/si"));
        assert_eq!(settings.logging.file, PathBuf::from("/data/si/smartinstall.log"));
        assert_eq!(settings.backup.dir, PathBuf::from("/data/si/backups"));
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn env_overrides_are_applied() {
        let settings = settings_from(&[
            ("SMARTINSTALL_HOME", "/data/si"),
            ("SMARTINSTALL_LOG_LEVEL", "debug"),
            ("SMARTINSTALL_DEBUG", "yes"),
            ("DB_NAME", "branch_02"),
            ("APP_SECRET_KEY", "  "),
        ])
        .unwrap();
        assert_eq!(settings.logging.level, LogLevel::Debug);
        assert!(settings.app.debug_mode);
        assert_eq!(settings.database.name, "branch_02");
        assert_eq!(settings.security.app_secret_key, None);
    }

    #[test]
    fn invalid_values_fail_loading() {
        let err = settings_from(&[("SMARTINSTALL_HOME", "/x"), ("SMARTINSTALL_LOG_LEVEL", "loud")])
            .unwrap_err();
        assert!(err.to_string().contains("loud"));

        let err = settings_from(&[("SMARTINSTALL_HOME", "/x"), ("ENCRYPTION_KEY", "short")])
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid ENCRYPTION_KEY"));

        let err = settings_from(&[("SMARTINSTALL_HOME", "/x"), ("DB_PORT", "-1")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid database settings");
    }

    #[test]
    fn env_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# branch overrides\nDB_NAME=branch_07\nDB_PASSWORD=\"p@ss w0rd\"\nSMARTINSTALL_DEBUG=true\n",
        )
        .unwrap();

        let entries = read_env_file(&path).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries["DB_NAME"], "branch_07");
        assert_eq!(entries["DB_PASSWORD"], "p@ss w0rd");
    }

    #[test]
    fn missing_env_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let entries = read_env_file(&dir.path().join(".env")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn malformed_env_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "DB_NAME='unterminated\n").unwrap();
        let err = read_env_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("malformed line in"), "{err}");
    }

    #[test]
    fn process_environment_overrides_env_file() {
        let file: HashMap<String, String> = [
            ("SMARTINSTALL_HOME", "/from/file"),
            ("DB_NAME", "file_db"),
            ("DB_HOST", "file-host"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let process: HashMap<&str, &str> =
            [("DB_NAME", "process_db")].into_iter().collect();

        let settings =
            Settings::from_lookup(layered(&file, |key| process.get(key).map(|v| v.to_string())))
                .unwrap();
        assert_eq!(settings.database.name, "process_db");
        assert_eq!(settings.database.host, "file-host");
        assert_eq!(settings.paths.base_dir, PathBuf::from("/from/file"));
    }

    #[test]
    fn serialized_settings_omit_secrets() {
        let mut settings = Settings::rooted_at("/data/si");
        settings.database.password = "pg-pass".into();
        settings.security.app_secret_key = Some("app-secret".into());
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("pg-pass"));
        assert!(!json.contains("app-secret"));
        assert!(json.contains("smartinstall_db"));
    }
}
