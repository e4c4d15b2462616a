//! Runtime configuration loaded from environment variables.
//!
//! Values are read once at start-up. An unset or empty variable falls back to
//! its default; a set but malformed one is a [`ConfigError`].

use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} is not valid unicode")]
    NotUnicode { key: &'static str },

    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

// =============================================================================
// Log Format
// =============================================================================

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err("expected 'pretty' or 'json'".to_string()),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => formatter.write_str("pretty"),
            Self::Json => formatter.write_str("json"),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub shutdown_grace: Duration,
}

impl ServerConfig {
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            shutdown_grace: Duration::from_secs(DEFAULT_SHUTDOWN_GRACE_SECS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Reads the configuration through `lookup`, which behaves like
    /// [`std::env::var`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for the first malformed variable.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Result<String, VarError>,
    {
        let host = read(&lookup, "HOST")?.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse(&lookup, "PORT", DEFAULT_PORT)?;
        let request_timeout = parse_seconds(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        let shutdown_grace =
            parse_seconds(&lookup, "SHUTDOWN_GRACE_SECS", DEFAULT_SHUTDOWN_GRACE_SECS)?;
        let log_format = parse(&lookup, "LOG_FORMAT", LogFormat::default())?;

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                request_timeout,
                shutdown_grace,
            },
            log_format,
        })
    }
}

fn read<L>(lookup: &L, key: &'static str) -> Result<Option<String>, ConfigError>
where
    L: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { key }),
    }
}

fn parse<L, T>(lookup: &L, key: &'static str, default: T) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Result<String, VarError>,
    T: FromStr,
    T::Err: fmt::Display,
{
    read(lookup, key)?.map_or(Ok(default), |value| {
        value.parse().map_err(|error: T::Err| ConfigError::InvalidValue {
            key,
            reason: error.to_string(),
            value,
        })
    })
}

fn parse_seconds<L>(lookup: &L, key: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    L: Fn(&str) -> Result<String, VarError>,
{
    match parse(lookup, key, default)? {
        0 => Err(ConfigError::InvalidValue {
            key,
            value: "0".to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        seconds => Ok(Duration::from_secs(seconds)),
    }
}
