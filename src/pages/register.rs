//! Registration page. Success navigates to the login page — creating
//! an account does not log the user in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::forms::RegisterForm;

#[cfg(feature = "csr")]
use crate::net::api::AuthClient;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

/// Registration page. The password confirmation is checked locally
/// before any request is sent and never transmitted.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());

    #[cfg(feature = "csr")]
    let navigate = use_navigate();
    #[cfg(feature = "csr")]
    let client = expect_context::<AuthClient>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if !form.try_update(|f| f.submit.begin()).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let client = client.clone();
            let (name, email, password, confirm_password) = form.with_untracked(|f| {
                (
                    f.name.clone(),
                    f.email.clone(),
                    f.password.clone(),
                    f.confirm_password.clone(),
                )
            });
            leptos::task::spawn_local(async move {
                match client.register(&name, &email, &password, &confirm_password).await {
                    Ok(()) => {
                        let _ = form.try_update(|f| f.submit.succeed());
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("registration failed: {err}");
                        let _ = form.try_update(|f| f.submit.fail(err.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <div class="register-page">
            <h2>"Register"</h2>
            {move || {
                form.with(|f| f.submit.error.clone())
                    .map(|msg| view! { <div class="error-message">{msg}</div> })
            }}
            <form class="register-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                    required=true
                />
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
                <input
                    type="password"
                    placeholder="Confirm Password"
                    prop:value=move || form.with(|f| f.confirm_password.clone())
                    on:input=move |ev| {
                        form.update(|f| f.set_confirm_password(event_target_value(&ev)));
                    }
                    required=true
                />
                <button type="submit" disabled=move || form.with(|f| f.submit.in_flight())>
                    "Register"
                </button>
            </form>
            <p class="form-footer">
                "Already have an account? "
                <A href="/login">"Log in"</A>
            </p>
        </div>
    }
}
