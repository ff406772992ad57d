//! # Data Transfer Objects (DTOs)
//!
//! Structures sent to and received from the backend REST API.
//!
//! ## Endpoints used by the mobile client
//!
//! ```text
//! POST /api/auth/login        LoginRequest  -> AuthResponse | ErrorResponse
//! GET  /api/auth/me           (bearer)      -> SessionResponse | 401
//! ```

pub mod auth;

pub use auth::*;
