//! # Session Store
//!
//! The single process-wide owner of the session snapshot.
//!
//! ## State Machine
//!
//! ```text
//! INIT ──check resolves──▶ AUTH(false|true)
//! AUTH(_) ──refresh_user_data──▶ LOADING ──check resolves──▶ AUTH(false|true)
//! AUTH(_)/LOADING ──sign_out──▶ AUTH(false)
//! ```
//!
//! INIT and LOADING are the snapshots with `is_loading() == true`.
//!
//! ## Coalescing
//!
//! At most one session check runs at a time. A refresh requested while one
//! is pending joins it: same [`Refresh`] handle, no extra check, no extra
//! LOADING emission. Each check is driven by the injected [`Spawn`]
//! capability, so it completes even if every caller drops its handle.
//!
//! ## Detached Checks
//!
//! [`SessionStore::sign_out`] and [`SessionStore::revalidate`] detach the
//! pending check instead of joining it. A detached check still runs to
//! completion and the next check only starts after it, but its outcome never
//! reaches the store:
//!
//! | Detached by | Its callers resolve with |
//! |---|---|
//! | `sign_out` | the signed-out snapshot `sign_out` produced |
//! | `revalidate` | the outcome of the check that replaced it |
//!
//! ## Failure Handling
//!
//! A check that errors or panics settles as "not authenticated". Callers of
//! [`SessionStore::refresh_user_data`] always get a settled snapshot.
//!
//! ## Ordering
//!
//! Emissions raised while listeners are being notified are queued and
//! delivered afterwards, so every listener sees every snapshot in version
//! order.

use std::cell::RefCell;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::rc::{Rc, Weak};

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use shared::UserInfo;

use crate::check::SessionCheck;
use crate::error::SessionError;
use crate::observer::{OrderedEmitter, Subscription};
use crate::snapshot::SessionSnapshot;
use crate::spawn::Spawn;

/// Handle on a pending (or finished) session check.
///
/// Cloneable; every clone resolves to the same settled snapshot.
pub type Refresh = Shared<LocalBoxFuture<'static, SessionSnapshot>>;

/// Resolves once a check's underlying call has returned.
type Done = Shared<LocalBoxFuture<'static, ()>>;

struct InFlight {
    id: u64,
    refresh: Refresh,
}

enum Detached {
    SignedOut(SessionSnapshot),
    Superseded(Refresh),
}

enum Settled {
    Now(SessionSnapshot),
    Follow(Refresh),
}

struct State {
    snapshot: SessionSnapshot,
    inflight: Option<InFlight>,
    detached: Vec<(u64, Detached)>,
    last_done: Option<Done>,
    checks_started: u64,
}

struct Inner {
    state: RefCell<State>,
    emitter: OrderedEmitter<SessionSnapshot>,
    check: Rc<dyn SessionCheck>,
    spawner: Rc<dyn Spawn>,
}

/// Cheaply cloneable handle on the shared session state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<Inner>,
}

impl SessionStore {
    /// Create the store in INIT and start the first session check.
    pub fn new(check: Rc<dyn SessionCheck>, spawner: Rc<dyn Spawn>) -> Self {
        let store = Self {
            inner: Rc::new(Inner {
                state: RefCell::new(State {
                    snapshot: SessionSnapshot::initial(),
                    inflight: None,
                    detached: Vec::new(),
                    last_done: None,
                    checks_started: 0,
                }),
                emitter: OrderedEmitter::new(),
                check,
                spawner,
            }),
        };

        let _ = store.refresh_user_data();
        store
    }

    /// Current snapshot. Never blocks.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().snapshot.clone()
    }

    /// Register `listener` for every subsequent snapshot.
    ///
    /// The listener is not called with the current snapshot; read
    /// [`snapshot`](Self::snapshot) first if needed.
    pub fn subscribe(&self, listener: impl Fn(&SessionSnapshot) + 'static) -> Subscription {
        self.inner.emitter.add(listener)
    }

    /// A session check is pending, attached or detached.
    pub fn is_refreshing(&self) -> bool {
        let state = self.inner.state.borrow();
        state.inflight.is_some() || !state.detached.is_empty()
    }

    /// Re-validate the session.
    ///
    /// Joins the pending check if there is one; otherwise moves to LOADING
    /// (unless already loading) and starts a new check.
    pub fn refresh_user_data(&self) -> Refresh {
        if let Some(inflight) = &self.inner.state.borrow().inflight {
            tracing::debug!(check = inflight.id, "Session check already in flight, joining it");
            return inflight.refresh.clone();
        }
        self.start_check()
    }

    /// Re-validate with a check that starts after the current credentials
    /// changed.
    ///
    /// A pending check was sent with the old credentials, so it is detached
    /// rather than joined; its callers resolve with the new check's outcome.
    pub fn revalidate(&self) -> Refresh {
        let superseded = self.inner.state.borrow_mut().inflight.take();
        let refresh = self.start_check();

        if let Some(old) = superseded {
            tracing::debug!(check = old.id, "Superseding in-flight session check");
            self.inner
                .state
                .borrow_mut()
                .detached
                .push((old.id, Detached::Superseded(refresh.clone())));
        }
        refresh
    }

    /// Drop the session immediately.
    ///
    /// A check still in flight is detached: it runs to completion and its
    /// callers settle signed out, but its outcome is discarded. The next
    /// refresh starts a new check once it has finished.
    pub fn sign_out(&self) {
        let settled = {
            let mut state = self.inner.state.borrow_mut();
            let settled = if !state.snapshot.is_loading() && !state.snapshot.is_authenticated() {
                None
            } else {
                let next = state.snapshot.settled(None);
                state.snapshot = next.clone();
                Some(next)
            };

            if let Some(inflight) = state.inflight.take() {
                tracing::debug!(check = inflight.id, "Detaching in-flight session check");
                let signed_out = state.snapshot.clone();
                state
                    .detached
                    .push((inflight.id, Detached::SignedOut(signed_out)));
            }
            settled
        };

        tracing::info!("Signed out");
        if let Some(snapshot) = settled {
            self.inner.emitter.publish(snapshot);
        }
    }

    fn start_check(&self) -> Refresh {
        let (id, refresh, loading) = {
            let mut state = self.inner.state.borrow_mut();
            state.checks_started += 1;
            let id = state.checks_started;

            let (done_tx, done_rx) = oneshot::channel();
            let done: Done = done_rx.map(|_| ()).boxed_local().shared();
            let after = state.last_done.replace(done);

            let refresh = run_check(
                Rc::downgrade(&self.inner),
                Rc::clone(&self.inner.check),
                id,
                after,
                done_tx,
            )
            .shared();
            state.inflight = Some(InFlight {
                id,
                refresh: refresh.clone(),
            });

            let loading = if state.snapshot.is_loading() {
                None
            } else {
                let next = state.snapshot.loading();
                state.snapshot = next.clone();
                Some(next)
            };
            (id, refresh, loading)
        };

        tracing::debug!(check = id, "Session check started");
        if let Some(snapshot) = loading {
            self.inner.emitter.publish(snapshot);
        }

        self.inner
            .spawner
            .spawn_local(refresh.clone().map(|_| ()).boxed_local());
        refresh
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("SessionStore")
            .field("snapshot", &state.snapshot)
            .field("refreshing", &state.inflight.is_some())
            .field("detached", &state.detached.len())
            .field("listeners", &self.inner.emitter.len())
            .finish()
    }
}

fn run_check(
    inner: Weak<Inner>,
    check: Rc<dyn SessionCheck>,
    id: u64,
    after: Option<Done>,
    done: oneshot::Sender<()>,
) -> LocalBoxFuture<'static, SessionSnapshot> {
    async move {
        // One check at a time, even across detached ones.
        if let Some(previous) = after {
            previous.await;
        }

        let user = match AssertUnwindSafe(check.check()).catch_unwind().await {
            Ok(Ok(user)) => user,
            Ok(Err(err)) => {
                tracing::warn!(check = id, error = %err, "Session check failed, treating session as signed out");
                None
            }
            Err(_) => {
                tracing::error!(check = id, error = %SessionError::CheckPanicked, "Session check failed, treating session as signed out");
                None
            }
        };
        let _ = done.send(());

        let settled = match inner.upgrade() {
            Some(inner) => inner.settle(id, user),
            None => Settled::Now(SessionSnapshot::initial().settled(user)),
        };
        match settled {
            Settled::Now(snapshot) => snapshot,
            Settled::Follow(next) => next.await,
        }
    }
    .boxed_local()
}

impl Inner {
    fn settle(&self, id: u64, user: Option<UserInfo>) -> Settled {
        let settled = {
            let mut state = self.state.borrow_mut();
            let current = state.inflight.as_ref().map(|inflight| inflight.id) == Some(id);
            if current {
                state.inflight = None;
                let next = state.snapshot.settled(user);
                state.snapshot = next.clone();
                Ok(next)
            } else {
                let index = state.detached.iter().position(|(detached, _)| *detached == id);
                Err(index.map(|index| state.detached.remove(index).1))
            }
        };

        match settled {
            Ok(snapshot) => {
                tracing::info!(
                    check = id,
                    authenticated = snapshot.is_authenticated(),
                    version = snapshot.version(),
                    "Session check settled"
                );
                self.emitter.publish(snapshot.clone());
                Settled::Now(snapshot)
            }
            Err(Some(Detached::SignedOut(snapshot))) => {
                tracing::debug!(check = id, "Discarding outcome of session check detached by sign-out");
                Settled::Now(snapshot)
            }
            Err(Some(Detached::Superseded(next))) => {
                tracing::debug!(check = id, "Discarding outcome of superseded session check");
                Settled::Follow(next)
            }
            Err(None) => Settled::Now(self.state.borrow().snapshot.clone()),
        }
    }
}
