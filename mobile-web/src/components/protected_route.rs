//! Route guard wrapper for protected screens
//!
//! ```text
//! <ProtectedRoute><ProfilePage/></ProtectedRoute>
//! ```
//!
//! Renders a loading screen while the session is being checked, replaces the
//! current history entry with the login screen (carrying the requested path
//! and query)
//! when signed out, and renders the children when signed in. Every new path
//! reached while signed in triggers one session refresh.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use leptos_router::NavigateOptions;
use lib_session::{location_of, GuardOutcome, RouteGuard};

use super::LoadingScreen;
use crate::state::session::use_session_context;
use crate::utils::config::use_client_config;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session_context();
    let guard_config = use_client_config().guard;
    let location = use_location();
    let guard = StoredValue::new(RouteGuard::new(guard_config.clone()));

    // Side effects: fault logging, redirect logging, per-path refresh.
    Effect::new(move || {
        let requested = location_of(&location.pathname.get(), &location.search.get());
        let snapshot = session.map(|ctx| ctx.snapshot.get());
        let decision = guard.try_update_value(|guard| guard.evaluate(snapshot.as_ref(), &requested));

        if let (Some(decision), Some(ctx)) = (decision, session) {
            if decision.refresh {
                let _ = ctx.refresh();
            }
        }
    });

    move || {
        let requested = location_of(&location.pathname.get(), &location.search.get());
        let snapshot = session.map(|ctx| ctx.snapshot.get());

        match RouteGuard::outcome_for(snapshot.as_ref(), &requested, &guard_config) {
            GuardOutcome::Loading(placeholder) => view! { <LoadingScreen placeholder/> }.into_any(),
            GuardOutcome::Redirect(redirect) => {
                let options = NavigateOptions {
                    replace: redirect.replace,
                    ..Default::default()
                };
                view! { <Redirect path=redirect.href() options/> }.into_any()
            }
            GuardOutcome::Render => children().into_any(),
        }
    }
}
