//! # Configuration
//!
//! Typed service configuration.
//!
//! Values are layered: code defaults, then an optional `config/default`
//! file, then `VEHICLE__`-prefixed environment variables with `__` as
//! the section separator (`VEHICLE__SERVER__PORT=9090`).
//!
//! # Examples
//!
//! ```
//! use vehicle_registry::config::ServiceConfig;
//!
//! let config = ServiceConfig::load().unwrap();
//! assert_eq!(config.server.port, 8080);
//! ```

use crate::infrastructure::lookups::http::RetryPolicy;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// HTTP server bind settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

/// Target settings for one lookup collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupTargetConfig {
    /// Base URL of the collaborator.
    pub base_url: String,
}

/// Shared lookup client settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total attempts per request, initial request included.
    pub retry_max_attempts: u32,
    /// Backoff before the first retry, in milliseconds.
    pub retry_backoff_ms: u64,
}

/// Root service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Pricing collaborator settings.
    pub pricing: LookupTargetConfig,
    /// Maps collaborator settings.
    pub maps: LookupTargetConfig,
    /// Shared lookup client settings.
    pub lookups: LookupConfig,
}

impl ServiceConfig {
    /// Loads the configuration from defaults, the optional
    /// `config/default` file, and the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a source cannot be parsed or a
    /// value fails to deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("pricing.base_url", "http://localhost:8082")?
            .set_default("maps.base_url", "http://localhost:9191")?
            .set_default("lookups.timeout_ms", 5000)?
            .set_default("lookups.retry_max_attempts", 3)?
            .set_default("lookups.retry_backoff_ms", 100)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("VEHICLE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the socket address string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Returns the lookup retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.lookups.retry_max_attempts,
            backoff_ms: self.lookups.retry_backoff_ms,
        }
    }
}
