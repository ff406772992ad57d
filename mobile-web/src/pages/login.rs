//! Login Page
//!
//! Public screen. After a successful login (or when a session already
//! exists) it goes to the path carried in the `redirect` query parameter,
//! falling back to `/`.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use lib_session::return_path_from_query;
use shared::LoginRequest;

use crate::services::auth;
use crate::state::session::use_session_context;
use crate::utils::config::use_client_config;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();
    let config = use_client_config();
    let location = use_location();
    let navigate = use_navigate();

    let (identity, set_identity) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let guard_config = config.guard.clone();
    let return_to = move || {
        location
            .search
            .with_untracked(|search| return_path_from_query(search, &guard_config))
            .unwrap_or_else(|| "/".to_string())
    };

    // Already signed in: skip the form.
    {
        let navigate = navigate.clone();
        let return_to = return_to.clone();
        Effect::new(move || {
            let Some(ctx) = session else { return };
            if !ctx.is_loading() && ctx.is_authenticated() {
                navigate(&return_to(), NavigateOptions { replace: true, ..Default::default() });
            }
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let request = LoginRequest {
            email_or_username: identity.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if request.email_or_username.is_empty() || request.password.is_empty() {
            set_error.set(Some("Enter your username and password".to_string()));
            return;
        }

        let config = config.clone();
        let navigate = navigate.clone();
        let target = return_to();
        set_error.set(None);
        set_submitting.set(true);

        leptos::task::spawn_local(async move {
            match auth::login(&config, &request).await {
                Ok(_) => {
                    match session.and_then(|ctx| ctx.revalidate()) {
                        Some(refresh) => {
                            refresh.await;
                        }
                        None => log::error!("Session provider missing; login cannot update the session"),
                    }
                    navigate(&target, NavigateOptions { replace: true, ..Default::default() });
                }
                Err(err) => {
                    log::warn!("Login failed: {}", err);
                    set_error.set(Some(err.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1 class="login-title">
                <span class="xf-red">"XF"</span><span class="terminal-white">"Mobile"</span>
            </h1>
            <form class="card login-form" on:submit=on_submit>
                <label for="identity">"Username or email"</label>
                <input
                    id="identity"
                    type="text"
                    autocomplete="username"
                    prop:value=identity
                    on:input=move |ev| set_identity.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button class="btn" type="submit" disabled=submitting>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
