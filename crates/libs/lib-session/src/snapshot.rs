//! Immutable session snapshot emitted by the store.

use shared::UserInfo;

/// One emission of the session state.
///
/// Snapshots are values: the store replaces its snapshot wholesale on every
/// change and bumps `version`, so consumers can compare versions to tell
/// emissions apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    version: u64,
    is_loading: bool,
    user: Option<UserInfo>,
}

impl SessionSnapshot {
    /// The INIT snapshot: loading, nobody signed in.
    pub fn initial() -> Self {
        Self {
            version: 0,
            is_loading: true,
            user: None,
        }
    }

    /// Monotonic emission counter, starting at 0.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// A check is in flight. `is_authenticated` is stale while this is true.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The signed-in user, when authenticated.
    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    /// Same session, check in flight.
    pub(crate) fn loading(&self) -> Self {
        Self {
            version: self.version + 1,
            is_loading: true,
            user: self.user.clone(),
        }
    }

    /// Check settled with `user`.
    pub(crate) fn settled(&self, user: Option<UserInfo>) -> Self {
        Self {
            version: self.version + 1,
            is_loading: false,
            user,
        }
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}
