//! # Route Guard
//!
//! Decides, for one protected screen, what to show for a given session
//! snapshot and path, and when to ask the store for a refresh.
//!
//! | Session | Outcome | Refresh |
//! |---|---|---|
//! | provider missing | `Loading(Degraded)` + logged once | never |
//! | loading | `Loading(Pending)` | no |
//! | signed out | `Redirect` to login with return path | no |
//! | signed in | `Render` | once per distinct path |
//!
//! Guards are evaluated against a location (path plus query). The redirect
//! carries the whole location so a login returns to it unchanged; the
//! refresh is keyed by the path alone: the guard remembers the last path it
//! requested a refresh for. The store's snapshot changes caused by that
//! refresh (LOADING, then settled) re-evaluate the guard on the same path and
//! do not request another one.

use crate::config::GuardConfig;
use crate::navigation::{path_of, Redirect};
use crate::snapshot::SessionSnapshot;

/// Which loading placeholder to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    /// A session check is in flight.
    Pending,
    /// No session provider in the composition. Shown indefinitely.
    Degraded,
}

/// What a protected screen renders. Exactly one per evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading(Placeholder),
    Redirect(Redirect),
    Render,
}

/// Outcome plus whether the host should fire a refresh now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardDecision {
    pub outcome: GuardOutcome,
    pub refresh: bool,
}

/// Per-mount guard state.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    config: GuardConfig,
    refreshed_path: Option<String>,
    reported_missing: bool,
}

impl RouteGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self {
            config,
            refreshed_path: None,
            reported_missing: false,
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Pure rendering half of [`evaluate`](Self::evaluate).
    pub fn outcome_for(
        session: Option<&SessionSnapshot>,
        location: &str,
        config: &GuardConfig,
    ) -> GuardOutcome {
        match session {
            None => GuardOutcome::Loading(Placeholder::Degraded),
            Some(snapshot) if snapshot.is_loading() => GuardOutcome::Loading(Placeholder::Pending),
            Some(snapshot) if !snapshot.is_authenticated() => {
                GuardOutcome::Redirect(Redirect::to_login(config, location))
            }
            Some(_) => GuardOutcome::Render,
        }
    }

    /// Evaluate the guard for `session` at `location`.
    ///
    /// `session` is `None` when no session provider could be found.
    pub fn evaluate(&mut self, session: Option<&SessionSnapshot>, location: &str) -> GuardDecision {
        let outcome = Self::outcome_for(session, location, &self.config);
        let path = path_of(location);

        let refresh = match &outcome {
            GuardOutcome::Loading(Placeholder::Degraded) => {
                if !self.reported_missing {
                    self.reported_missing = true;
                    tracing::error!(path, "Session provider missing; protected screen stays on the loading placeholder");
                }
                false
            }
            GuardOutcome::Loading(Placeholder::Pending) => false,
            GuardOutcome::Redirect(redirect) => {
                tracing::info!(path, to = %redirect.to, "Not signed in, redirecting to login");
                false
            }
            GuardOutcome::Render => {
                let fresh = self.refreshed_path.as_deref() != Some(path);
                if fresh {
                    self.refreshed_path = Some(path.to_string());
                }
                fresh
            }
        };

        GuardDecision { outcome, refresh }
    }
}
