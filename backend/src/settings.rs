//! Server configuration loaded via OrthoConfig.
//!
//! Values merge from CLI flags, `NEARBY_*` environment variables, and an
//! optional configuration file. Numeric limits carry loader defaults; the
//! address and URL fields are optional and accessors fill in their defaults.
//! Accessors reject unusable values.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

use crate::outbound::randomuser::DEFAULT_SOURCE_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    #[error("database url must not be blank")]
    BlankDatabaseUrl,
    #[error("pool_max_size must be at least 1")]
    ZeroPoolSize,
    #[error("invalid source url {value:?}: {message}")]
    SourceUrl { value: String, message: String },
    #[error("source_timeout_secs must be at least 1")]
    ZeroTimeout,
}

/// Top-level settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NEARBY")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Base URL of the random-person source.
    pub source_url: Option<String>,
    /// Whole-request timeout for the source, in seconds.
    #[ortho_config(default = 30)]
    pub source_timeout_secs: u64,
}

impl AppSettings {
    /// Socket address to bind, defaulting to `0.0.0.0:8000`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.trim()
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }

    /// Configured database URL, if any.
    pub fn database_url(&self) -> Result<Option<&str>, SettingsError> {
        match self.database_url.as_deref() {
            Some(url) if url.trim().is_empty() => Err(SettingsError::BlankDatabaseUrl),
            other => Ok(other.map(str::trim)),
        }
    }

    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size {
            0 => Err(SettingsError::ZeroPoolSize),
            size => Ok(size),
        }
    }

    /// Source endpoint, defaulting to the public RandomUser API.
    pub fn source_url(&self) -> Result<Url, SettingsError> {
        let raw = self.source_url.as_deref().unwrap_or(DEFAULT_SOURCE_URL);
        Url::parse(raw.trim()).map_err(|err| SettingsError::SourceUrl {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    pub fn source_timeout(&self) -> Result<Duration, SettingsError> {
        match self.source_timeout_secs {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
