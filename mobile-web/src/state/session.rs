//! Session state management

use std::rc::Rc;

use leptos::prelude::*;
use lib_session::{Refresh, SessionSnapshot, SessionStore};
use shared::UserInfo;

use crate::services::session::{HttpSessionCheck, LeptosSpawner};
use crate::services::token;
use crate::utils::config::ClientConfig;

/// Global session context
///
/// The store itself is `!Send`, so it lives in local arena storage; views read
/// the mirrored `snapshot` signal.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<SessionStore, LocalStorage>,
    pub snapshot: RwSignal<SessionSnapshot>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        let snapshot = RwSignal::new(store.snapshot());
        // Lives as long as the app.
        store
            .subscribe(move |next| {
                let _ = snapshot.try_set(next.clone());
            })
            .detach();

        Self {
            store: StoredValue::new_local(store),
            snapshot,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.with(SessionSnapshot::is_loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.with(SessionSnapshot::is_authenticated)
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.snapshot.with(|snapshot| snapshot.user().cloned())
    }

    /// Re-validate the session. `None` once the app has been torn down.
    pub fn refresh(&self) -> Option<Refresh> {
        self.store.try_with_value(SessionStore::refresh_user_data)
    }

    /// Re-validate with a fresh check after the token changed, superseding
    /// any check sent with the old one.
    pub fn revalidate(&self) -> Option<Refresh> {
        self.store.try_with_value(SessionStore::revalidate)
    }

    /// Forget the token and drop the session.
    pub fn sign_out(&self) {
        token::clear_token();
        self.store.with_value(SessionStore::sign_out);
    }
}

pub fn provide_session_context(config: &ClientConfig) -> SessionContext {
    let store = SessionStore::new(
        Rc::new(HttpSessionCheck::new(config)),
        Rc::new(LeptosSpawner),
    );
    let context = SessionContext::new(store);
    provide_context(context);
    context
}

/// `None` when no [`SessionContext`] was provided above the caller.
pub fn use_session_context() -> Option<SessionContext> {
    use_context::<SessionContext>()
}
