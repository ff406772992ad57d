//! Bearer token persistence in `localStorage`.

use lib_session::{Result, SessionError};
use web_sys::Storage;

use crate::utils::constants::TOKEN_STORAGE_KEY;

fn storage() -> Result<Storage> {
    let window = web_sys::window().ok_or_else(|| SessionError::Storage("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|err| SessionError::Storage(format!("{:?}", err)))?
        .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_string()))
}

/// Stored token, if any.
pub fn load_token() -> Option<String> {
    let storage = match storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("Cannot read session token: {}", err);
            return None;
        }
    };

    storage
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) -> Result<()> {
    storage()?
        .set_item(TOKEN_STORAGE_KEY, token)
        .map_err(|err| SessionError::Storage(format!("{:?}", err)))
}

/// Forget the stored token. Missing storage is not an error here.
pub fn clear_token() {
    if let Ok(storage) = storage() {
        if let Err(err) = storage.remove_item(TOKEN_STORAGE_KEY) {
            log::warn!("Failed to clear session token: {:?}", err);
        }
    }
}

/// Forget the stored token only if it is still `sent`.
///
/// Returns whether the token was cleared.
pub fn clear_token_if_current(sent: &str) -> bool {
    if !is_current(load_token().as_deref(), sent) {
        return false;
    }
    clear_token();
    true
}

fn is_current(stored: Option<&str>, sent: &str) -> bool {
    stored == Some(sent)
}
