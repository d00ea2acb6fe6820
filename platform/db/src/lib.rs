//! Database connection settings. Connectivity itself lives in the
//! application's data layer; this crate only describes where to connect.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use url::Url;

const SSL_MODES: &[&str] = &[
    "disable",
    "allow",
    "prefer",
    "require",
    "verify-ca",
    "verify-full",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DbError {
    #[error("invalid DB_PORT {0:?}")]
    InvalidPort(String),
    #[error("unknown DB_SSL_MODE {0:?}")]
    InvalidSslMode(String),
    #[error("pool bounds invalid: min {min} > max {max}")]
    InvalidPool { min: u32, max: u32 },
    #[error("cannot build connection url: {0}")]
    InvalidUrl(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Postgres connection settings.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub ssl_mode: String,
    pub pool_min: u32,
    pub pool_max: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            name: "smartinstall_db".into(),
            user: "postgres".into(),
            password: String::new(),
            ssl_mode: "prefer".into(),
            pool_min: 1,
            pool_max: 10,
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("ssl_mode", &self.ssl_mode)
            .field("pool_min", &self.pool_min)
            .field("pool_max", &self.pool_max)
            .finish()
    }
}

impl DatabaseSettings {
    pub fn from_env() -> DbResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> DbResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(host) = lookup("DB_HOST") {
            settings.host = host;
        }
        if let Some(raw) = lookup("DB_PORT") {
            settings.port = raw
                .trim()
                .parse()
                .map_err(|_| DbError::InvalidPort(raw.clone()))?;
        }
        if let Some(name) = lookup("DB_NAME") {
            settings.name = name;
        }
        if let Some(user) = lookup("DB_USER") {
            settings.user = user;
        }
        if let Some(password) = lookup("DB_PASSWORD") {
            settings.password = password;
        }
        if let Some(mode) = lookup("DB_SSL_MODE") {
            if !SSL_MODES.contains(&mode.as_str()) {
                return Err(DbError::InvalidSslMode(mode));
            }
            settings.ssl_mode = mode;
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> DbResult<()> {
        if self.pool_min > self.pool_max {
            return Err(DbError::InvalidPool {
                min: self.pool_min,
                max: self.pool_max,
            });
        }
        Ok(())
    }

    /// libpq-style URL. User, password and database name are
    /// percent-encoded; the password is included only when set.
    pub fn connection_url(&self) -> DbResult<String> {
        let mut url = Url::parse(&format!("postgres://{}:{}/", self.host, self.port))
            .map_err(|err| DbError::InvalidUrl(err.to_string()))?;
        url.set_username(&self.user)
            .map_err(|_| DbError::InvalidUrl("url cannot carry a user".into()))?;
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| DbError::InvalidUrl("url cannot carry a password".into()))?;
        }
        url.path_segments_mut()
            .map_err(|_| DbError::InvalidUrl("url has no path".into()))?
            .pop_if_empty()
            .push(&self.name);
        url.query_pairs_mut().append_pair("sslmode", &self.ssl_mode);
        Ok(url.into())
    }
}
