//! Profile Page

use leptos::prelude::*;
use shared::{initials, truncate_middle};

use crate::state::session::use_session_context;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session_context();
    let user = move || session.and_then(|ctx| ctx.user());

    let on_sign_out = move |_| {
        if let Some(ctx) = session {
            ctx.sign_out();
        }
    };

    view! {
        <div class="page profile-page">
            {move || {
                user()
                    .map(|user| {
                        let wallet = user
                            .wallet_address
                            .as_deref()
                            .map(|address| truncate_middle(address, 4, 4))
                            .unwrap_or_else(|| "No wallet linked".to_string());
                        view! {
                            <div class="card profile-card">
                                <div class="avatar">{initials(&user.username)}</div>
                                <h2>{user.username.clone()}</h2>
                                <p class="muted">{user.email.clone()}</p>
                                <dl>
                                    <dt>"Wallet"</dt>
                                    <dd class="mono">{wallet}</dd>
                                    <dt>"Member since"</dt>
                                    <dd>{user.created_at.clone()}</dd>
                                </dl>
                            </div>
                        }
                    })
            }}
            <button class="btn btn-secondary" on:click=on_sign_out>"Sign out"</button>
        </div>
    }
}
