use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

pub const ENV_DRIVER_NAME: &str = "DB_DRIVER_NAME";
pub const ENV_USER: &str = "DB_USER";
pub const ENV_PASS: &str = "DB_PASS";
pub const ENV_NAME: &str = "DB_NAME";
pub const ENV_HOST: &str = "DB_HOST";
pub const ENV_PORT: &str = "DB_PORT";

/// Settings required to open a database connection.
///
/// `driver_name` selects the driver, the other required fields go into the
/// connection string. For sqlite `db_name` is the path to the database file.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub driver_name: String,
    pub user_name: String,
    pub password: String,
    pub db_name: String,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "***" };
        return f
            .debug_struct("DbConfig")
            .field("driver_name", &self.driver_name)
            .field("user_name", &self.user_name)
            .field("password", &password)
            .field("db_name", &self.db_name)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish();
    }
}

/// Quotes `value` libpq style when it would not survive as a bare word.
fn conn_value(value: &str) -> String {
    let needs_quotes =
        value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '\'' || c == '\\');
    if !needs_quotes {
        return value.to_string();
    }
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    return format!("'{escaped}'");
}

/// Where bootstrap takes its configuration from.
#[derive(Clone, Debug)]
pub enum ConfigSource {
    Explicit(DbConfig),
    EnvFile(PathBuf),
}

impl ConfigSource {
    pub fn resolve(self) -> Result<DbConfig> {
        return match self {
            ConfigSource::Explicit(config) => Ok(config),
            ConfigSource::EnvFile(path) => DbConfig::from_env_file(&path),
        };
    }
}

impl From<DbConfig> for ConfigSource {
    fn from(config: DbConfig) -> Self {
        return ConfigSource::Explicit(config);
    }
}

impl DbConfig {
    pub fn new(
        driver_name: impl Into<String>,
        user_name: impl Into<String>,
        password: impl Into<String>,
        db_name: impl Into<String>,
    ) -> Self {
        return Self {
            driver_name: driver_name.into(),
            user_name: user_name.into(),
            password: password.into(),
            db_name: db_name.into(),
            host: None,
            port: None,
        };
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        return self;
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        return self;
    }

    /// Loads `path` into the process environment and reads the `DB_*` variables.
    ///
    /// Variables that are already set are kept. Missing required variables
    /// become empty strings and are reported later by [`DbConfig::validate`].
    pub fn from_env_file(path: &Path) -> Result<Self> {
        dotenvy::from_path(path)?;
        debug!("Loaded environment from {}", path.display());

        let port = match std::env::var(ENV_PORT) {
            Ok(value) if !value.is_empty() => Some(
                value
                    .parse::<u16>()
                    .map_err(|_| Error::InvalidPort { value })?,
            ),
            _ => None,
        };
        return Ok(Self {
            driver_name: std::env::var(ENV_DRIVER_NAME).unwrap_or_default(),
            user_name: std::env::var(ENV_USER).unwrap_or_default(),
            password: std::env::var(ENV_PASS).unwrap_or_default(),
            db_name: std::env::var(ENV_NAME).unwrap_or_default(),
            host: std::env::var(ENV_HOST).ok().filter(|host| !host.is_empty()),
            port,
        });
    }

    fn required_fields(&self) -> [(&'static str, &str); 4] {
        return [
            ("DriverName", self.driver_name.as_str()),
            ("UserName", self.user_name.as_str()),
            ("Password", self.password.as_str()),
            ("DBName", self.db_name.as_str()),
        ];
    }

    /// Reports every empty required field at once, in declaration order.
    pub fn validate(&self) -> Result<()> {
        let fields: Vec<&'static str> = self
            .required_fields()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();
        if !fields.is_empty() {
            return Err(Error::InvalidConfig { fields });
        }
        return Ok(());
    }

    /// `user=<u> password=<p> dbname=<d>` plus host and port when set.
    /// Values with whitespace, quotes or backslashes are quoted.
    pub fn connection_string(&self) -> String {
        let mut conn = format!(
            "user={} password={} dbname={}",
            conn_value(&self.user_name),
            conn_value(&self.password),
            conn_value(&self.db_name)
        );
        if let Some(host) = &self.host {
            conn.push_str(&format!(" host={}", conn_value(host)));
        }
        if let Some(port) = self.port {
            conn.push_str(&format!(" port={port}"));
        }
        return conn;
    }
}
