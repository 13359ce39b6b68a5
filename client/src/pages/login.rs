//! Login page: email + password exchanged for a bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is only touched after a successful answer. A ticket taken
//! before the request makes a late answer harmless: if the user logged out,
//! another tab signed in, or a newer attempt was submitted meanwhile, the
//! answer is dropped.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tracker::forms;

use crate::state::auth::AuthHandle;

pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Logging In..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());

        let request = match forms::validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                error.set(e.to_string());
                return;
            }
        };
        let Some(ticket) = auth.begin_login() else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(request).await {
                    Ok(credentials) => match auth.complete_login(ticket, credentials) {
                        Ok(home) => navigate(home, NavigateOptions::default()),
                        Err(stale) => log::info!("{stale}"),
                    },
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(e.user_message());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, ticket, &navigate);
        }
    };

    view! {
        <div class="auth-card">
            <h2>"Employee Login"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="alert alert--error">{move || error.get()}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="form__label">"Email address"</label>
                <input
                    class="form__input"
                    type="email"
                    placeholder="Enter email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label class="form__label">"Password"</label>
                <input
                    class="form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || submit_label(busy.get())}
                </button>
            </form>
            <p class="auth-card__footer">
                "Need an account? "
                <a href="/register">"Register Here"</a>
            </p>
        </div>
    }
}
