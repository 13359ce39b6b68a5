//! Self-service registration. New accounts wait for admin approval.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tracker::forms;

pub const REGISTERED_MESSAGE: &str =
    "Registration successful! Please wait for an administrator to approve your account.";

/// Delay before sending a freshly registered user to the login page.
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 5_000;

pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Registering..." } else { "Register" }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        message.set(String::new());

        let request = match forms::validate_register(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(request) => request,
            Err(e) => {
                error.set(e.to_string());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(request).await {
                    Ok(()) => {
                        message.set(REGISTERED_MESSAGE.to_owned());
                        busy.set(false);
                        gloo_timers::future::TimeoutFuture::new(LOGIN_REDIRECT_DELAY_MS).await;
                        navigate(tracker::guard::LOGIN_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &navigate);
        }
    };

    view! {
        <div class="auth-card">
            <h2>"Employee Registration"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="alert alert--error">{move || error.get()}</p>
            </Show>
            <Show when=move || !message.get().is_empty()>
                <p class="alert alert--success">{move || message.get()}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="form__label">"Full name"</label>
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
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
                <p class="form__hint">"Your account requires admin approval before you can log in."</p>
                <button class="btn btn--success" type="submit" disabled=move || busy.get()>
                    {move || submit_label(busy.get())}
                </button>
            </form>
            <p class="auth-card__footer">
                "Already have an account? "
                <a href="/login">"Login Here"</a>
            </p>
        </div>
    }
}
