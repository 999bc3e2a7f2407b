//! Legislature API address configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where the legislature API lives.
///
/// No timeout or retry settings exist; every call is a single attempt that
/// waits as long as the server takes.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host and port of the API server
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Versioned path prefix shared by every endpoint
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl ApiConfig {
    /// Creates a configuration for the given origin with the default prefix.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            prefix: default_prefix(),
        }
    }

    /// Sets the path prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Origin plus prefix, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!(
            "{}{}",
            self.origin.trim_end_matches('/'),
            self.prefix.trim_end_matches('/')
        )
    }

    /// Full URL for an endpoint path such as `/proposals/`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.origin.trim().is_empty() {
            return Err(ValidationError::MissingRequired("API__ORIGIN"));
        }
        if !(self.origin.starts_with("http://") || self.origin.starts_with("https://")) {
            return Err(ValidationError::InvalidOrigin);
        }
        if !self.prefix.is_empty() && !self.prefix.starts_with('/') {
            return Err(ValidationError::InvalidPrefix);
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            prefix: default_prefix(),
        }
    }
}

fn default_origin() -> String {
    "http://localhost:8000".to_string()
}

fn default_prefix() -> String {
    "/api/v1".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8000/api/v1");
    }

    #[test]
    fn test_url_for_joins_without_double_slash() {
        let config = ApiConfig::new("http://api.example.com/").with_prefix("/api/v1/");
        assert_eq!(
            config.url_for("/proposals/"),
            "http://api.example.com/api/v1/proposals/"
        );
    }

    #[test]
    fn test_empty_prefix_is_allowed() {
        let config = ApiConfig::new("http://127.0.0.1:9000").with_prefix("");
        assert!(config.validate().is_ok());
        assert_eq!(config.url_for("/parties/"), "http://127.0.0.1:9000/parties/");
    }

    #[test]
    fn test_validation_rejects_non_http_origin() {
        let config = ApiConfig::new("ftp://example.com");
        assert!(matches!(config.validate(), Err(ValidationError::InvalidOrigin)));
    }

    #[test]
    fn test_validation_rejects_relative_prefix() {
        let config = ApiConfig::default().with_prefix("api/v1");
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPrefix)));
    }

    #[test]
    fn test_validation_rejects_empty_origin() {
        let config = ApiConfig::new("  ");
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }
}
