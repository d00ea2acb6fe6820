use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::URL_SAFE};
use serde::Serialize;

use crate::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub description: String,
    pub language: String,
    pub text_direction: TextDirection,
    pub font_family: String,
    pub font_size_normal: u8,
    pub font_size_header: u8,
    pub font_size_title: u8,
    pub debug_mode: bool,
    pub session_timeout_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "SmartInstall".into(),
            version: "1.0.0".into(),
            description: "نظام إدارة مبيعات الأجهزة الكهربائية بالتقسيط".into(),
            language: "ar".into(),
            text_direction: TextDirection::Rtl,
            font_family: "Cairo".into(),
            font_size_normal: 11,
            font_size_header: 14,
            font_size_title: 16,
            debug_mode: false,
            session_timeout_secs: 1800,
        }
    }
}

impl AppSettings {
    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_secs)
    }
}

/// Secrets and hashing knobs. Secrets never appear in `Debug` or serialized
/// output.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SecuritySettings {
    #[serde(skip_serializing)]
    pub encryption_key: Option<String>,
    #[serde(skip_serializing)]
    pub app_secret_key: Option<String>,
    pub bcrypt_rounds: u32,
    pub auto_logout_enabled: bool,
    pub auto_logout_timeout_secs: u64,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            encryption_key: None,
            app_secret_key: None,
            bcrypt_rounds: 12,
            auto_logout_enabled: true,
            auto_logout_timeout_secs: 1800,
        }
    }
}

impl fmt::Debug for SecuritySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("SecuritySettings")
            .field("encryption_key", &redact(&self.encryption_key))
            .field("app_secret_key", &redact(&self.app_secret_key))
            .field("bcrypt_rounds", &self.bcrypt_rounds)
            .field("auto_logout_enabled", &self.auto_logout_enabled)
            .field("auto_logout_timeout_secs", &self.auto_logout_timeout_secs)
            .finish()
    }
}

impl SecuritySettings {
    /// Fernet keys are 32 bytes, URL-safe base64 encoded.
    pub fn validate_encryption_key(key: &str) -> Result<(), ConfigError> {
        let bytes = URL_SAFE
            .decode(key.trim())
            .map_err(|err| ConfigError::InvalidEncryptionKey(err.to_string()))?;
        if bytes.len() != 32 {
            return Err(ConfigError::InvalidEncryptionKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(())
    }

    pub fn auto_logout_timeout(&self) -> Option<Duration> {
        self.auto_logout_enabled
            .then(|| Duration::from_secs(self.auto_logout_timeout_secs))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARNING" | "WARN" => Some(LogLevel::Warning),
            "ERROR" => Some(LogLevel::Error),
            "CRITICAL" => Some(LogLevel::Critical),
            _ => None,
        }
    }

    /// `tracing` has no level above error, so critical folds into it.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub file: PathBuf,
    pub max_bytes: u64,
    pub backup_count: u32,
}

impl LoggingSettings {
    pub fn new(file: PathBuf) -> Self {
        Self {
            level: LogLevel::Info,
            file,
            max_bytes: 10 * 1024 * 1024,
            backup_count: 5,
        }
    }
}
