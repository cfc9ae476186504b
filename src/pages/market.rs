//! Protected market page shown after a successful login.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::{SessionStore, display_name};

/// Market page — greets the stored username.
/// Redirects to `/login` when no session is present. This gate is
/// display-only; real access control is enforced server-side.
#[component]
pub fn MarketPage() -> impl IntoView {
    let store = expect_context::<Arc<dyn SessionStore>>();

    // Redirect to login if not authenticated.
    {
        let store = Arc::clone(&store);
        let navigate = use_navigate();
        Effect::new(move || {
            if store.get().is_none() {
                navigate("/login", NavigateOptions::default());
            }
        });
    }

    let greeting = move || {
        let session = store.get();
        format!("Welcome, {}!", display_name(session.as_ref()))
    };

    view! {
        <div class="market-page">
            <h1>{greeting}</h1>
            <p>"You are now signed in."</p>
        </div>
    }
}
