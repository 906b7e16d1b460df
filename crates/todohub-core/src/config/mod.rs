//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files, `TODOHUB__`-prefixed environment variables, and the
//! conventional `DATABASE_URL` / `JWT_SECRET` / `PORT` variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, MAX_JWT_TTL_HOURS};
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::{LogFormat, LoggingConfig};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, lowest precedence first: `config/default.toml`,
    /// `config/{env}.toml`, `TODOHUB__SECTION__KEY` environment variables,
    /// then `DATABASE_URL`, `JWT_SECRET` and `PORT`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => Some(raw.parse::<u16>().map_err(|e| {
                AppError::configuration(format!("PORT must be a valid port number: {e}"))
            })?),
            Err(_) => None,
        };

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("TODOHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("auth.jwt_secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("server.port", port.map(i64::from))?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Check settings that must be present before the server may start.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "JWT signing secret is not set (auth.jwt_secret / JWT_SECRET)",
            ));
        }

        if self.database.provider == DatabaseProvider::Postgres
            && self.database.url.trim().is_empty()
        {
            return Err(AppError::configuration(
                "Database URL is not set (database.url / DATABASE_URL)",
            ));
        }

        if self.auth.jwt_ttl_hours == 0 || self.auth.jwt_ttl_hours > MAX_JWT_TTL_HOURS {
            return Err(AppError::configuration(format!(
                "auth.jwt_ttl_hours must be between 1 and {MAX_JWT_TTL_HOURS}"
            )));
        }

        Ok(())
    }
}
