//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod logging;
pub mod security;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::LoggingConfig;
pub use self::security::{SecurityConfig, SecurityMode};

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration
/// (`config/default.toml` + environment overlay + `CRM__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Customer store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Access policy and credential settings.
    #[serde(default)]
    pub security: SecurityConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the `config/` directory.
    ///
    /// Merges `config/default` with the `config/{env}` overlay and
    /// environment variables prefixed with `CRM` (separator `__`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from an explicit directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CRM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
