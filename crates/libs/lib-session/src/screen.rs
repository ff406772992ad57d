//! # Mounted Guard
//!
//! [`GuardedScreen`] wires a [`RouteGuard`] to a live [`SessionStore`] and
//! [`Navigator`] for hosts without a reactive framework. It re-evaluates on
//! every snapshot and every navigation, reports each outcome to the host's
//! render callback, performs the redirect and fires the refresh.
//!
//! Dropping the screen unmounts it: both subscriptions are released, so a
//! refresh still in flight settles into the store without reaching this
//! screen.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::GuardConfig;
use crate::guard::{GuardOutcome, Placeholder, RouteGuard};
use crate::navigation::{path_of, Navigator};
use crate::observer::Subscription;
use crate::snapshot::SessionSnapshot;
use crate::store::SessionStore;

struct Mounted {
    session: Option<SessionStore>,
    navigator: Rc<dyn Navigator>,
    on_render: Box<dyn Fn(&GuardOutcome)>,
    guard: RefCell<RouteGuard>,
    outcome: RefCell<GuardOutcome>,
}

/// A protected screen mounted behind a route guard.
pub struct GuardedScreen {
    mounted: Rc<Mounted>,
    _session: Option<Subscription>,
    _navigation: Subscription,
}

impl GuardedScreen {
    /// Mount a guarded screen and evaluate it once immediately.
    ///
    /// `session` is `None` when the host could not find a session provider;
    /// the screen then stays on the degraded placeholder.
    pub fn mount(
        session: Option<SessionStore>,
        navigator: Rc<dyn Navigator>,
        config: GuardConfig,
        on_render: impl Fn(&GuardOutcome) + 'static,
    ) -> Self {
        let mounted = Rc::new(Mounted {
            session,
            navigator,
            on_render: Box::new(on_render),
            guard: RefCell::new(RouteGuard::new(config)),
            outcome: RefCell::new(GuardOutcome::Loading(Placeholder::Pending)),
        });

        let session_subscription = mounted.session.as_ref().map(|store| {
            let weak = Rc::downgrade(&mounted);
            store.subscribe(move |snapshot| {
                if let Some(mounted) = weak.upgrade() {
                    let location = mounted.navigator.current_location();
                    mounted.apply(Some(snapshot), &location);
                }
            })
        });

        let navigation_subscription = {
            let weak = Rc::downgrade(&mounted);
            mounted.navigator.watch(Box::new(move |location: &str| {
                if let Some(mounted) = weak.upgrade() {
                    let snapshot = mounted.session.as_ref().map(SessionStore::snapshot);
                    mounted.apply(snapshot.as_ref(), location);
                }
            }))
        };

        let snapshot = mounted.session.as_ref().map(SessionStore::snapshot);
        let location = mounted.navigator.current_location();
        mounted.apply(snapshot.as_ref(), &location);

        Self {
            mounted,
            _session: session_subscription,
            _navigation: navigation_subscription,
        }
    }

    /// Outcome of the most recent evaluation.
    pub fn outcome(&self) -> GuardOutcome {
        self.mounted.outcome.borrow().clone()
    }

    /// Unmount now. Same as dropping the screen.
    pub fn unmount(self) {}
}

impl fmt::Debug for GuardedScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedScreen")
            .field("outcome", &*self.mounted.outcome.borrow())
            .field("has_session", &self.mounted.session.is_some())
            .finish()
    }
}

impl Mounted {
    fn apply(&self, snapshot: Option<&SessionSnapshot>, location: &str) {
        // The login screen is public; the host swaps this screen out when
        // it navigates there.
        if path_of(location) == self.guard.borrow().config().login_path {
            return;
        }

        let decision = self.guard.borrow_mut().evaluate(snapshot, location);
        *self.outcome.borrow_mut() = decision.outcome.clone();
        (self.on_render)(&decision.outcome);

        if let GuardOutcome::Redirect(redirect) = &decision.outcome {
            self.navigator.redirect(redirect);
        }

        if decision.refresh {
            if let Some(store) = &self.session {
                let _ = store.refresh_user_data();
            }
        }
    }
}
