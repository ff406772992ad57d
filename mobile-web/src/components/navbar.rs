//! Bottom Navigation Bar

use leptos::prelude::*;
use leptos_router::components::A;

const TABS: &[(&str, &str)] = &[
    ("/home", "Home"),
    ("/market", "Market"),
    ("/trade", "Trade"),
    ("/withdraw", "Withdraw"),
    ("/profile", "Profile"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            {TABS
                .iter()
                .map(|(href, label)| {
                    view! {
                        <A href=*href>
                            <span class="nav-tab">{*label}</span>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
