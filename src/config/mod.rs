//! Client configuration.
//!
//! Read from the environment (plus an optional `.env`) with the
//! `PARLIAMENT_CLIENT` prefix; `__` separates nested keys, so
//! `PARLIAMENT_CLIENT__API__ORIGIN` lands in `api.origin`.
//!
//! ```no_run
//! use parliament_client::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("Talking to {}", config.api.base_url());
//! # Ok(())
//! # }
//! ```

mod api;
mod error;
mod logging;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Everything the client reads at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads `.env` if present, then the `PARLIAMENT_CLIENT__*` variables.
    /// Anything unset keeps its default.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PARLIAMENT_CLIENT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section; the first problem wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("PARLIAMENT_CLIENT__API__ORIGIN");
        env::remove_var("PARLIAMENT_CLIENT__API__PREFIX");
        env::remove_var("PARLIAMENT_CLIENT__LOGGING__LEVEL");
        env::remove_var("PARLIAMENT_CLIENT__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url(), "http://localhost:8000/api/v1");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PARLIAMENT_CLIENT__API__ORIGIN", "https://parliament.example.org");
        env::set_var("PARLIAMENT_CLIENT__API__PREFIX", "/api/v2");
        env::set_var("PARLIAMENT_CLIENT__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.api.base_url(),
            "https://parliament.example.org/api/v2"
        );
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_origin() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PARLIAMENT_CLIENT__API__ORIGIN", "localhost:8000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
