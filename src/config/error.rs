//! Errors raised while loading or checking configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A configuration value that is present but unusable.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    MissingRequired(&'static str),

    #[error("API origin must start with http:// or https://")]
    InvalidOrigin,

    #[error("API prefix must start with '/'")]
    InvalidPrefix,
}
