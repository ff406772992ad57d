//! # Session Check over HTTP
//!
//! `GET {api_base}/api/auth/me` with the stored bearer token.
//!
//! | Situation | Result |
//! |---|---|
//! | no stored token | `Ok(None)`, no request |
//! | 200 | `Ok(Some(user))` |
//! | 401 / 403 | `Ok(None)`, token cleared if it is still the one sent |
//! | other status | `Err(UnexpectedStatus)` |
//! | transport failure / bad body / timeout | `Err(Network / Decode / Timeout)` |
//!
//! Errors are turned into "signed out" by the store; they are only logged.

use std::future::Future;

use async_trait::async_trait;
use futures::future::{select, Either, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use lib_session::{Result, SessionCheck, SessionError, Spawn};
use shared::{SessionResponse, UserInfo};

use super::token;
use crate::utils::config::ClientConfig;
use crate::utils::constants::SESSION_ENDPOINT;

pub struct HttpSessionCheck {
    url: String,
    timeout_ms: u32,
}

impl HttpSessionCheck {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            url: config.endpoint(SESSION_ENDPOINT),
            timeout_ms: config.check_timeout_ms,
        }
    }
}

#[async_trait(?Send)]
impl SessionCheck for HttpSessionCheck {
    async fn check(&self) -> Result<Option<UserInfo>> {
        let Some(token) = token::load_token() else {
            log::debug!("No stored session token");
            return Ok(None);
        };

        let request = Request::get(&self.url)
            .header("Authorization", &format!("Bearer {}", token))
            .send();
        let response = with_timeout(request, self.timeout_ms)
            .await?
            .map_err(|err| SessionError::Network(err.to_string()))?;

        match classify_status(response.status()) {
            StatusOutcome::Session => {
                let body: SessionResponse = response
                    .json()
                    .await
                    .map_err(|err| SessionError::Decode(err.to_string()))?;
                Ok(Some(body.user))
            }
            StatusOutcome::Rejected => {
                // A login may have stored a new token while this request was out.
                if token::clear_token_if_current(&token) {
                    log::info!("Session token rejected, cleared it");
                } else {
                    log::info!("Session token rejected, but it has since been replaced");
                }
                Ok(None)
            }
            StatusOutcome::Unexpected(status) => Err(SessionError::UnexpectedStatus(status)),
        }
    }
}

/// What a session endpoint status code means for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// Body carries the user.
    Session,
    /// The token is no longer accepted.
    Rejected,
    Unexpected(u16),
}

pub fn classify_status(status: u16) -> StatusOutcome {
    match status {
        200 => StatusOutcome::Session,
        401 | 403 => StatusOutcome::Rejected,
        status => StatusOutcome::Unexpected(status),
    }
}

/// Resolve `future`, or fail with [`SessionError::Timeout`] after `timeout_ms`.
pub async fn with_timeout<T>(future: impl Future<Output = T>, timeout_ms: u32) -> Result<T> {
    match select(Box::pin(future), TimeoutFuture::new(timeout_ms)).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(SessionError::Timeout(timeout_ms)),
    }
}

/// Drives session checks on the Leptos executor.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeptosSpawner;

impl Spawn for LeptosSpawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_status_carries_session() {
        assert_eq!(classify_status(200), StatusOutcome::Session);
    }

    #[test]
    fn test_auth_failures_reject_token() {
        assert_eq!(classify_status(401), StatusOutcome::Rejected);
        assert_eq!(classify_status(403), StatusOutcome::Rejected);
    }

    #[test]
    fn test_other_statuses_are_unexpected() {
        for status in [201, 204, 302, 404, 429, 500, 503] {
            assert_eq!(classify_status(status), StatusOutcome::Unexpected(status), "status {status}");
        }
    }
}
