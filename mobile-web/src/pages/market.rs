//! Market Page - static market cards

use leptos::prelude::*;

use crate::utils::format::{format_number, format_percentage, format_usd};

pub struct Market {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change_24h: f64,
    pub volume_24h: f64,
}

pub const MARKETS: &[Market] = &[
    Market { symbol: "BTC", name: "Bitcoin", price: 67250.5, change_24h: 2.41, volume_24h: 28_450_000_000.0 },
    Market { symbol: "ETH", name: "Ethereum", price: 3480.12, change_24h: 1.87, volume_24h: 14_120_000_000.0 },
    Market { symbol: "SOL", name: "Solana", price: 172.35, change_24h: 5.02, volume_24h: 3_870_000_000.0 },
    Market { symbol: "XRP", name: "XRP", price: 0.5231, change_24h: -1.12, volume_24h: 1_240_000_000.0 },
    Market { symbol: "ADA", name: "Cardano", price: 0.4478, change_24h: -0.64, volume_24h: 410_000_000.0 },
];

#[component]
pub fn MarketPage() -> impl IntoView {
    view! {
        <div class="page market-page">
            <h2 class="page-title">"Market"</h2>
            {MARKETS
                .iter()
                .map(|market| {
                    let change_class = if market.change_24h >= 0.0 { "change up" } else { "change down" };
                    view! {
                        <div class="card market-card">
                            <div class="market-name">
                                <span class="symbol">{market.symbol}</span>
                                <span class="name">{market.name}</span>
                            </div>
                            <div class="market-figures">
                                <span class="price">{format_usd(market.price)}</span>
                                <span class=change_class>{format_percentage(market.change_24h)}</span>
                                <span class="volume">{format!("Vol ${}", format_number(market.volume_24h, 0))}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
