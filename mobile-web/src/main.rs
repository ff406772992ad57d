//! XForce Mobile - Leptos client
//!
//! Mobile-styled trading screens behind a session guard.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("XForce mobile client starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static boot spinner from index.html once WASM is running.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("No document available, cannot hide boot spinner");
        return;
    };

    let Some(loading_element) = document.get_element_by_id("leptos-loading") else {
        log::debug!("Boot spinner not present");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(err) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class to boot spinner: {:?}", err);
        }
    }
    if let Err(err) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to hide boot spinner: {:?}", err);
    }
}
