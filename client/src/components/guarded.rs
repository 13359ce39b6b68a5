//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision is a memo over the session signal, so it is re-evaluated on
//! navigation (the component remounts) and on every session change (login,
//! logout, another tab). Redirects replace the history entry.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use tracker::{GuardDecision, RouteAccess, guard};

use crate::components::access_denied::AccessDenied;
use crate::state::auth::AuthHandle;
use crate::util::auth::install_guard_redirect;

/// Render `children` only when the session may see a route of `access`.
#[component]
pub fn Guarded(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let decision = Memo::new(move |_| guard::decide(&auth.session(), access));
    install_guard_redirect(decision, use_navigate());

    view! {
        {move || match decision.get() {
            GuardDecision::Render => children().into_any(),
            GuardDecision::AccessDenied { role } => view! { <AccessDenied role=role/> }.into_any(),
            GuardDecision::Redirect(_) => ().into_any(),
        }}
    }
}

/// Root path and anything the router did not match: send the session to
/// its home page.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let decision = Memo::new(move |_| guard::resolve(guard::ROOT_PATH, &auth.session()));
    install_guard_redirect(decision, use_navigate());

    view! {
        {move || match decision.get() {
            GuardDecision::AccessDenied { role } => view! { <AccessDenied role=role/> }.into_any(),
            GuardDecision::Render | GuardDecision::Redirect(_) => ().into_any(),
        }}
    }
}
