//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::market::MARKETS;
use crate::state::session::use_session_context;
use crate::utils::format::{format_percentage, format_usd};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();
    let greeting = move || {
        session
            .and_then(|ctx| ctx.user())
            .map(|user| format!("Welcome back, {}", user.username))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <div class="page home-page">
            <h2 class="page-title">{greeting}</h2>
            <section class="card">
                <h3>"Top movers"</h3>
                <ul class="market-list">
                    {MARKETS
                        .iter()
                        .take(3)
                        .map(|market| {
                            let change_class = if market.change_24h >= 0.0 { "up" } else { "down" };
                            view! {
                                <li class="market-row">
                                    <span class="symbol">{market.symbol}</span>
                                    <span class="price">{format_usd(market.price)}</span>
                                    <span class=change_class>{format_percentage(market.change_24h)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <A href="/market">
                    <span class="btn">"All markets"</span>
                </A>
            </section>
        </div>
    }
}
