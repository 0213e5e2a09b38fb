//! External API endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Gateway hosting every Academia.net endpoint.
pub const DEFAULT_BASE_URL: &str = "https://hdvcvqqro4.execute-api.us-east-1.amazonaws.com/dev";

const fn default_timeout_secs() -> u64 {
    30
}

/// LLM replies are slow; the chat endpoint gets its own budget.
const fn default_chat_timeout_secs() -> u64 {
    60
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("academia/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL; endpoint paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout for list/submit endpoints.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Request timeout for the chat endpoint.
    #[serde(default = "default_chat_timeout_secs")]
    pub chat_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            chat_timeout_secs: default_chat_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Check that the base URL is an absolute http(s) URL and timeouts are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.timeout_secs == 0 || self.chat_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "timeouts must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_point_at_gateway() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.chat_timeout_secs, 60);
        assert!(config.user_agent.starts_with("academia/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_relative_base_url() {
        let config = ApiConfig {
            base_url: "/api".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "api.base_url"
        ));
    }

    #[test]
    fn base_trims_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/api/".into(),
            ..Default::default()
        };
        assert_eq!(config.base(), "http://localhost:8000/api");
    }
}
