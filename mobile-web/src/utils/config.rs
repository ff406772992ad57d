//! # Client Configuration
//!
//! Built once at startup from compile-time environment overrides, falling
//! back to [`constants`](super::constants).
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `XFORCE_API_BASE` | `api_base` | [`API_BASE`] |
//! | `XFORCE_CHECK_TIMEOUT_MS` | `check_timeout_ms` | [`SESSION_CHECK_TIMEOUT_MS`] |

use leptos::prelude::*;
use lib_session::{GuardConfig, Result, SessionError};

use super::constants::{API_BASE, SESSION_CHECK_TIMEOUT_MS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without trailing slash.
    pub api_base: String,
    /// Upper bound for one session check.
    pub check_timeout_ms: u32,
    /// Login route and return-path parameter.
    pub guard: GuardConfig,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("XFORCE_API_BASE"),
            option_env!("XFORCE_CHECK_TIMEOUT_MS"),
        )
    }

    fn from_overrides(api_base: Option<&str>, check_timeout_ms: Option<&str>) -> Self {
        Self {
            api_base: api_base
                .unwrap_or(API_BASE)
                .trim_end_matches('/')
                .to_string(),
            check_timeout_ms: check_timeout_ms
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(SESSION_CHECK_TIMEOUT_MS),
            guard: GuardConfig::default(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(SessionError::Config(format!(
                "api_base must be an http(s) URL, got {:?}",
                self.api_base
            )));
        }

        if self.check_timeout_ms == 0 {
            return Err(SessionError::Config(
                "check_timeout_ms must be greater than zero".to_string(),
            ));
        }

        self.guard.validate()
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Client configuration from context, or the build-time defaults.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::from_overrides(None, None);

        assert_eq!(config.api_base, API_BASE);
        assert_eq!(config.check_timeout_ms, SESSION_CHECK_TIMEOUT_MS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ClientConfig::from_overrides(Some("https://api.xforce.example/"), Some(" 2500 "));

        assert_eq!(config.api_base, "https://api.xforce.example");
        assert_eq!(config.check_timeout_ms, 2500);
        assert_eq!(config.endpoint("/api/auth/me"), "https://api.xforce.example/api/auth/me");
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        let config = ClientConfig::from_overrides(None, Some("soon"));

        assert_eq!(config.check_timeout_ms, SESSION_CHECK_TIMEOUT_MS);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ClientConfig::from_overrides(Some("ftp://example"), None);
        assert!(matches!(config.validate(), Err(SessionError::Config(_))));

        config.api_base = API_BASE.to_string();
        config.check_timeout_ms = 0;
        assert!(matches!(config.validate(), Err(SessionError::Config(_))));
    }
}
