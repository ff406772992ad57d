//! Login against the backend.

use gloo_net::http::Request;
use lib_session::SessionError;
use shared::{AuthResponse, ErrorResponse, LoginRequest};
use thiserror::Error;

use super::session::with_timeout;
use super::token;
use crate::utils::config::ClientConfig;
use crate::utils::constants::LOGIN_ENDPOINT;

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// POST the credentials and persist the returned token.
pub async fn login(config: &ClientConfig, request: &LoginRequest) -> Result<AuthResponse, LoginError> {
    let pending = Request::post(&config.endpoint(LOGIN_ENDPOINT))
        .json(request)
        .map_err(|err| SessionError::Decode(err.to_string()))?
        .send();
    let response = with_timeout(pending, config.check_timeout_ms)
        .await?
        .map_err(|err| SessionError::Network(err.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("Login failed with status {}", status),
        };
        log::info!("Login rejected: status={}", status);
        return Err(LoginError::Rejected(message));
    }

    let auth: AuthResponse = response
        .json()
        .await
        .map_err(|err| SessionError::Decode(err.to_string()))?;
    token::store_token(&auth.token)?;

    log::info!("Logged in as {}", auth.user.username);
    Ok(auth)
}
