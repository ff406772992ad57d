//! Trade Page - order ticket placeholder

use leptos::prelude::*;

use crate::pages::market::MARKETS;
use crate::utils::format::format_usd;

#[component]
pub fn TradePage() -> impl IntoView {
    let (selected, set_selected) = signal(0usize);
    let (notice, set_notice) = signal(None::<&'static str>);

    let price = move || MARKETS.get(selected.get()).map(|market| format_usd(market.price));

    view! {
        <div class="page trade-page">
            <h2 class="page-title">"Trade"</h2>
            <div class="card">
                <div class="pair-tabs">
                    {MARKETS
                        .iter()
                        .enumerate()
                        .map(|(index, market)| {
                            view! {
                                <button
                                    class="pair-tab"
                                    class:active=move || selected.get() == index
                                    on:click=move |_| set_selected.set(index)
                                >
                                    {market.symbol}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="price">{price}</p>
                <div class="order-buttons">
                    <button class="btn buy" on:click=move |_| set_notice.set(Some("Trading is not available yet"))>"Buy"</button>
                    <button class="btn sell" on:click=move |_| set_notice.set(Some("Trading is not available yet"))>"Sell"</button>
                </div>
                {move || notice.get().map(|text| view! { <p class="notice">{text}</p> })}
            </div>
        </div>
    }
}
