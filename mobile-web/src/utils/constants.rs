//! Application constants

/// Backend base URL when `XFORCE_API_BASE` is not set at build time.
pub const API_BASE: &str = "http://127.0.0.1:3001";

/// Session check timeout when `XFORCE_CHECK_TIMEOUT_MS` is not set at build time.
pub const SESSION_CHECK_TIMEOUT_MS: u32 = 10_000;

/// localStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "xforce_session_token";

// Endpoints
pub const SESSION_ENDPOINT: &str = "/api/auth/me";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
