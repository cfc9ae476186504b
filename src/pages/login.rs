//! Login page: email/password form posting to the auth service.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::forms::LoginForm;

#[cfg(feature = "csr")]
use crate::net::api::AuthClient;
#[cfg(feature = "csr")]
use crate::session::SessionStore;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;
#[cfg(feature = "csr")]
use std::sync::Arc;

/// Login page. A successful login persists the session and navigates
/// to the protected market view; failures surface one error message
/// and keep the entered field values.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());

    #[cfg(feature = "csr")]
    let navigate = use_navigate();
    #[cfg(feature = "csr")]
    let store = expect_context::<Arc<dyn SessionStore>>();
    #[cfg(feature = "csr")]
    let client = expect_context::<AuthClient>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // Suppress the default form submission (full page reload).
        ev.prevent_default();

        // No-op while a submission is already in flight.
        if !form.try_update(|f| f.submit.begin()).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let store = Arc::clone(&store);
            let client = client.clone();
            let (email, password) = form.with_untracked(|f| (f.email.clone(), f.password.clone()));
            leptos::task::spawn_local(async move {
                match client.login(&email, &password).await {
                    Ok(session) => {
                        store.set(&session);
                        // try_update: the result is dropped if the page
                        // was torn down while the request was in flight.
                        let _ = form.try_update(|f| f.submit.succeed());
                        navigate("/stock-market", NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("login failed: {err}");
                        let _ = form.try_update(|f| f.submit.fail(err.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <h2>"Login"</h2>
            {move || {
                form.with(|f| f.submit.error.clone())
                    .map(|msg| view! { <div class="error-message">{msg}</div> })
            }}
            <form class="login-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email Address"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    required=true
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                    required=true
                />
                <button type="submit" disabled=move || form.with(|f| f.submit.in_flight())>
                    "Login"
                </button>
            </form>
            <p class="form-footer">
                "Don't have an account? "
                <A href="/register">"Register now"</A>
            </p>
        </div>
    }
}
