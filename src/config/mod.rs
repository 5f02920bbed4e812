//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TASKROOM_BOT` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment runs the bot offline.
//!
//! # Example
//!
//! ```no_run
//! use taskroom_bot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod api;
mod error;
mod logging;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Task API connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Console front end
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Console front end configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// User id the console conversation acts as
    #[serde(default = "default_console_user")]
    pub user_id: i64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            user_id: default_console_user(),
        }
    }
}

fn default_console_user() -> i64 {
    1
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TASKROOM_BOT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `TASKROOM_BOT__API__BASE_URL=...` -> `api.base_url = ...`
    /// - `TASKROOM_BOT__LOGGING__JSON=true` -> `logging.json = true`
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TASKROOM_BOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.logging.validate()?;
        if self.console.user_id <= 0 {
            return Err(ValidationError::InvalidConsoleUser);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("TASKROOM_BOT__API__BASE_URL");
        env::remove_var("TASKROOM_BOT__API__TIMEOUT_SECS");
        env::remove_var("TASKROOM_BOT__API__TOKEN");
        env::remove_var("TASKROOM_BOT__LOGGING__JSON");
        env::remove_var("TASKROOM_BOT__CONSOLE__USER_ID");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(!config.api.is_remote());
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.console.user_id, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TASKROOM_BOT__API__BASE_URL", "http://localhost:8000/api");
        env::set_var("TASKROOM_BOT__API__TIMEOUT_SECS", "3");
        env::set_var("TASKROOM_BOT__API__TOKEN", "s3cret");
        env::set_var("TASKROOM_BOT__LOGGING__JSON", "true");
        env::set_var("TASKROOM_BOT__CONSOLE__USER_ID", "42");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://localhost:8000/api")
        );
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(
            config.api.token.as_ref().map(|t| t.expose_secret().as_str()),
            Some("s3cret")
        );
        assert!(config.logging.json);
        assert_eq!(config.console.user_id, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_positive_console_user() {
        let config = AppConfig {
            console: ConsoleConfig { user_id: 0 },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidConsoleUser));
    }
}
