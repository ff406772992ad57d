//! Full-screen loading placeholder

use leptos::prelude::*;
use lib_session::Placeholder;

#[component]
pub fn LoadingScreen(placeholder: Placeholder) -> impl IntoView {
    let label = match placeholder {
        Placeholder::Pending => "Checking your session...",
        Placeholder::Degraded => "Loading...",
    };

    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="spinner"></div>
            <p class="loading-label">{label}</p>
        </div>
    }
}
