//! # Session Errors
//!
//! Error type for everything that can go wrong while establishing or
//! re-validating a session.
//!
//! ## Error Categories
//!
//! - **Transport**: [`Network`](SessionError::Network),
//!   [`Timeout`](SessionError::Timeout),
//!   [`UnexpectedStatus`](SessionError::UnexpectedStatus)
//! - **Payload**: [`Decode`](SessionError::Decode)
//! - **Client side**: [`Storage`](SessionError::Storage),
//!   [`CheckPanicked`](SessionError::CheckPanicked),
//!   [`Config`](SessionError::Config)
//!
//! A session check that fails with any of these never reaches the route
//! guard: [`SessionStore`](crate::store::SessionStore) logs the error and
//! settles as "not authenticated". A rejected token (401/403) is not an error
//! at all, it is the `Ok(None)` outcome of a check.
//!
//! ```rust
//! use lib_session::error::SessionError;
//!
//! let err = SessionError::UnexpectedStatus(502);
//! assert_eq!(err.to_string(), "Unexpected status from session endpoint: 502");
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, SessionError>`.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Failure while checking, establishing or configuring a session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The request never produced a response (offline, DNS, CORS, refused).
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured budget.
    #[error("Session check timed out after {0} ms")]
    Timeout(u32),

    /// The endpoint answered with a status that is neither success nor an
    /// explicit rejection.
    #[error("Unexpected status from session endpoint: {0}")]
    UnexpectedStatus(u16),

    /// The response body did not match the expected DTO.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Token storage was unavailable or refused the write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The check implementation panicked instead of returning.
    #[error("Session check panicked")]
    CheckPanicked,

    /// Invalid guard or client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}
