//! # Session Check Capability
//!
//! The store does not know how a session is validated. Hosts inject a
//! [`SessionCheck`]; the browser client asks the backend's `/api/auth/me`,
//! tests use scripted fakes.

use async_trait::async_trait;
use shared::UserInfo;

use crate::error::Result;

/// Validate the current session.
///
/// - `Ok(Some(user))`: a valid session exists
/// - `Ok(None)`: no session, or the backend rejected it
/// - `Err(_)`: the check itself failed; the store treats this as `Ok(None)`
///
/// Checks run on the single UI thread, so the returned future need not be
/// `Send`.
#[async_trait(?Send)]
pub trait SessionCheck {
    async fn check(&self) -> Result<Option<UserInfo>>;
}
