//! # Guard Configuration
//!
//! Where unauthenticated users are sent and how the return path travels with
//! them. Hosts build one [`GuardConfig`] at startup, call
//! [`GuardConfig::validate`] once, and hand clones to every guard.
//!
//! ```rust
//! use lib_session::config::GuardConfig;
//!
//! let config = GuardConfig::default().with_login_path("/sign-in");
//! config.validate().unwrap();
//! assert_eq!(config.login_path, "/sign-in");
//! assert_eq!(config.return_param, "redirect");
//! ```

use crate::error::{Result, SessionError};

/// Default login screen path.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Default query parameter carrying the return path.
pub const DEFAULT_RETURN_PARAM: &str = "redirect";

/// Route guard configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    /// Absolute path of the login screen.
    pub login_path: String,

    /// Query parameter name used to carry the originally requested path.
    pub return_param: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            return_param: DEFAULT_RETURN_PARAM.to_string(),
        }
    }
}

impl GuardConfig {
    /// Replace the login screen path.
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Replace the return-path query parameter name.
    pub fn with_return_param(mut self, param: impl Into<String>) -> Self {
        self.return_param = param.into();
        self
    }

    /// Validate configuration values.
    ///
    /// The login path must be an absolute in-app path without query or
    /// fragment (the guard appends its own query). The return parameter must
    /// be a non-empty, URL-safe name.
    pub fn validate(&self) -> Result<()> {
        if !self.login_path.starts_with('/') || self.login_path.starts_with("//") {
            return Err(SessionError::Config(format!(
                "login path must be an absolute in-app path, got {:?}",
                self.login_path
            )));
        }

        if self.login_path.contains(|c: char| c == '?' || c == '#') {
            return Err(SessionError::Config(
                "login path must not carry a query or fragment".to_string(),
            ));
        }

        let param_ok = !self.return_param.is_empty()
            && self
                .return_param
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
        if !param_ok {
            return Err(SessionError::Config(format!(
                "return parameter must be a non-empty URL-safe name, got {:?}",
                self.return_param
            )));
        }

        Ok(())
    }
}
