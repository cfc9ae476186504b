//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::api::AuthClient;
use crate::pages::{login::LoginPage, market::MarketPage, register::RegisterPage};
use crate::session::{BrowserSessionStore, SessionStore};

/// Root application component.
///
/// Injects the session store and auth client as contexts (so tests can
/// substitute an in-memory store) and sets up client-side routing. The
/// default and unknown routes redirect to the login page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: Arc<dyn SessionStore> = Arc::new(BrowserSessionStore);
    provide_context(store);
    provide_context(AuthClient::from_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/stockdesk.css"/>
        <Title text="Stockdesk"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("stock-market") view=MarketPage/>
            </Routes>
        </Router>
    }
}
