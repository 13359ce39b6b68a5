//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The link set is derived from the session on every change; the bar keeps
//! no state of its own. Logging out from a protected page leaves the
//! redirect to that page's guard.

use leptos::prelude::*;
use tracker::guard;
use tracker::nav::{NavTarget, nav_links_for};

use crate::state::auth::AuthHandle;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();

    let links = move || {
        nav_links_for(&auth.session())
            .into_iter()
            .map(|link| match link.target {
                NavTarget::Path(path) => view! {
                    <a class="nav-bar__link" href=path>
                        {link.label}
                    </a>
                }
                .into_any(),
                NavTarget::Logout => view! {
                    <button class="nav-bar__logout" on:click=move |_| auth.logout()>
                        {link.label}
                    </button>
                }
                .into_any(),
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href=move || guard::home_path(&auth.session())>
                "Daily Work Tracker"
            </a>
            <div class="nav-bar__links">{links}</div>
        </nav>
    }
}
