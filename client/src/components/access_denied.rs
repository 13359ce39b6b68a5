//! Shown instead of a protected page when the role is not recognized.

#[cfg(test)]
#[path = "access_denied_test.rs"]
mod access_denied_test;

use leptos::prelude::*;

use crate::state::auth::AuthHandle;

pub fn access_denied_message(role: &str) -> String {
    let role = role.trim();
    if role.is_empty() {
        "Your account has no role assigned. Contact an administrator.".to_owned()
    } else {
        format!("Your account role \"{role}\" is not recognized. Contact an administrator.")
    }
}

#[component]
pub fn AccessDenied(role: String) -> impl IntoView {
    let auth = expect_context::<AuthHandle>();

    view! {
        <section class="access-denied">
            <h2>"Access Denied"</h2>
            <p class="alert alert--error">{access_denied_message(&role)}</p>
            <button class="btn" on:click=move |_| auth.logout()>
                "Logout"
            </button>
        </section>
    }
}
