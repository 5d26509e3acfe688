//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LEADERSHIP_FMEA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use leadership_fmea::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod analysis;
mod error;
mod server;

pub use analysis::{AnalysisConfig, MAX_AGENT_DELAY_MS};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a
/// runnable development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Analysis run settings (explanations, pacing, input limits)
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LEADERSHIP_FMEA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LEADERSHIP_FMEA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LEADERSHIP_FMEA__ANALYSIS__AGENT_DELAY_MS=1200` -> `analysis.agent_delay_ms = 1200`
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
                    .prefix("LEADERSHIP_FMEA")
                    .separator("__"),
            )
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
        self.analysis.validate()?;

        // A full run must finish before the HTTP timeout cuts it off.
        let run_delay = self.analysis.run_delay();
        if run_delay >= self.server.request_timeout() {
            return Err(ValidationError::RunDelayExceedsTimeout {
                run_delay_ms: run_delay.as_millis() as u64,
                timeout_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }
}
