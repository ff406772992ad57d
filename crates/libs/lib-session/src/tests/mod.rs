//! # Session Guard Tests
//!
//! Store, guard, mounted-screen and navigation behaviour. Async tests run on a
//! `LocalSet` because the store spawns `!Send` checks with `TokioSpawner`.

mod guard;
mod navigation;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use shared::UserInfo;
use tokio::sync::oneshot;

use crate::check::SessionCheck;
use crate::error::{Result, SessionError};
use crate::observer::Subscription;
use crate::snapshot::SessionSnapshot;
use crate::spawn::TokioSpawner;
use crate::store::SessionStore;

/// Install a test subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn test_user(username: &str) -> UserInfo {
    UserInfo {
        id: "42".to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        wallet_address: None,
    }
}

enum Reply {
    Now(Result<Option<UserInfo>>),
    Gated(oneshot::Receiver<Result<Option<UserInfo>>>),
    Panic,
}

/// Session check answering from a script, one entry per call.
///
/// Unscripted calls answer "signed out".
#[derive(Default)]
pub struct ScriptedCheck {
    calls: Cell<usize>,
    replies: RefCell<VecDeque<Reply>>,
}

impl ScriptedCheck {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Queue an immediate reply.
    pub fn reply(&self, reply: Result<Option<UserInfo>>) {
        self.replies.borrow_mut().push_back(Reply::Now(reply));
    }

    /// Queue a reply that waits until the returned sender fires.
    pub fn gate(&self) -> oneshot::Sender<Result<Option<UserInfo>>> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Reply::Gated(rx));
        tx
    }

    /// Queue a call that panics.
    pub fn panic_next(&self) {
        self.replies.borrow_mut().push_back(Reply::Panic);
    }

    /// Checks actually executed so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl SessionCheck for ScriptedCheck {
    async fn check(&self) -> Result<Option<UserInfo>> {
        self.calls.set(self.calls.get() + 1);
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(Reply::Now(reply)) => reply,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(SessionError::Network("gate dropped".to_string()))),
            Some(Reply::Panic) => panic!("scripted session check panic"),
            None => Ok(None),
        }
    }
}

/// Build a store on the current `LocalSet`.
pub fn store_with(check: &Rc<ScriptedCheck>) -> SessionStore {
    let check: Rc<dyn SessionCheck> = check.clone();
    SessionStore::new(check, Rc::new(TokioSpawner))
}

/// Record every snapshot the store emits from now on.
pub fn record(store: &SessionStore) -> (Rc<RefCell<Vec<SessionSnapshot>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let subscription = {
        let seen = Rc::clone(&seen);
        store.subscribe(move |snapshot| seen.borrow_mut().push(snapshot.clone()))
    };
    (seen, subscription)
}

/// Let spawned local tasks run.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

pub fn signed_in(username: &str) -> SessionSnapshot {
    SessionSnapshot::initial().settled(Some(test_user(username)))
}

pub fn signed_out() -> SessionSnapshot {
    SessionSnapshot::initial().settled(None)
}
