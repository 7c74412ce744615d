//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config` and
//! `dotenvy` crates. Values are read from environment variables with the
//! `HANDBOOK_ADVISOR` prefix (nested values separated by `__`), then overlaid
//! with an optional `config/secrets.toml` file so that a deployed secrets store
//! takes precedence over local environment fallbacks.
//!
//! # Example
//!
//! ```no_run
//! use handbook_advisor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().expect("Invalid socket address"));
//! ```

mod ai;
mod error;
mod handbook;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use handbook::HandbookConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Path of the optional secrets overlay file (without extension).
const SECRETS_FILE: &str = "config/secrets";

/// Root application configuration
///
/// Contains all configuration sections for the Handbook Advisor application.
/// Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Handbook document configuration (path, cache expiry)
    #[serde(default)]
    pub handbook: HandbookConfig,
}

impl AppConfig {
    /// Load configuration from the environment and the optional secrets file
    ///
    /// This function:
    /// 1. Loads `.env` if present (for development)
    /// 2. Reads environment variables with the `HANDBOOK_ADVISOR` prefix,
    ///    `__` separating nested values
    /// 3. Overlays `config/secrets.toml` if present, so secrets-store values
    ///    win over environment fallbacks
    ///
    /// # Environment Variable Format
    ///
    /// - `HANDBOOK_ADVISOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `HANDBOOK_ADVISOR__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HANDBOOK_ADVISOR")
                    .separator("__"),
            )
            .add_source(config::File::with_name(SECRETS_FILE).required(false))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.handbook.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
