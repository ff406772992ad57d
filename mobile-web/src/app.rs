//! XForce Mobile - Leptos Frontend
//!
//! Every screen except `/login` sits behind [`ProtectedRoute`].

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, ProtectedRoute};
use crate::pages::{HomePage, LoginPage, MarketPage, ProfilePage, TradePage, WithdrawPage};
use crate::state::session::provide_session_context;
use crate::utils::config::ClientConfig;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env();
    if let Err(err) = config.validate() {
        log::error!("Invalid client configuration: {}", err);
    }
    log::info!("Using API at {}", config.api_base);

    provide_context(config.clone());
    provide_session_context(&config);

    view! {
        <Router>
            <div class="app-container">
                <main class="screen">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/") view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }/>
                        <Route path=path!("/home") view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }/>
                        <Route path=path!("/market") view=|| view! { <ProtectedRoute><MarketPage/></ProtectedRoute> }/>
                        <Route path=path!("/trade") view=|| view! { <ProtectedRoute><TradePage/></ProtectedRoute> }/>
                        <Route path=path!("/withdraw") view=|| view! { <ProtectedRoute><WithdrawPage/></ProtectedRoute> }/>
                        <Route path=path!("/profile") view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }/>
                    </Routes>
                </main>
                <Navbar/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page" style="text-align: center;">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/home">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
