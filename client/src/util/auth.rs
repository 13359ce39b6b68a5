//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes, the root path and the login page all react to the same
//! guard decision, so they share one redirect effect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use tracker::GuardDecision;

/// Page a decision sends the browser to, if any.
pub fn redirect_target(decision: &GuardDecision) -> Option<&'static str> {
    match decision {
        GuardDecision::Redirect(to) => Some(to),
        GuardDecision::Render | GuardDecision::AccessDenied { .. } => None,
    }
}

/// Guard redirects replace the history entry so "back" cannot land on a
/// page the guard just refused.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever `decision` turns into a redirect.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(to) = redirect_target(&decision.get()) {
            navigate(to, replace_options());
        }
    });
}
