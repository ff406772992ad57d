//! Withdraw Page - placeholder form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn WithdrawPage() -> impl IntoView {
    let (address, set_address) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (notice, set_notice) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let valid_amount = amount
            .get_untracked()
            .trim()
            .parse::<f64>()
            .is_ok_and(|value| value > 0.0);
        let message = if address.get_untracked().trim().is_empty() || !valid_amount {
            "Enter a destination address and a positive amount"
        } else {
            "Withdrawals are not available yet"
        };
        set_notice.set(Some(message.to_string()));
    };

    view! {
        <div class="page withdraw-page">
            <h2 class="page-title">"Withdraw"</h2>
            <form class="card" on:submit=on_submit>
                <label for="address">"Destination address"</label>
                <input
                    id="address"
                    type="text"
                    prop:value=address
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                />
                <label for="amount">"Amount"</label>
                <input
                    id="amount"
                    type="text"
                    inputmode="decimal"
                    prop:value=amount
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Withdraw"</button>
                {move || notice.get().map(|text| view! { <p class="notice">{text}</p> })}
            </form>
        </div>
    }
}
