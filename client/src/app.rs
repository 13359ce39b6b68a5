//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use tracker::RouteAccess;

use crate::components::guarded::{Guarded, HomeRedirect};
use crate::components::nav_bar::NavBar;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, employee_dashboard::EmployeeDashboardPage, login::LoginPage,
    register::RegisterPage,
};
use crate::state::auth::AuthHandle;

/// Root application component.
///
/// Restores the stored session once, provides it as context, and keeps it in
/// sync with other tabs for the lifetime of the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthHandle::new();
    provide_context(auth);
    crate::util::storage::install_cross_tab_sync(auth);

    view! {
        <Title text="Daily Work Tracker"/>

        <Router>
            <NavBar/>
            <main class="container">
                <Routes fallback=|| view! { <HomeRedirect/> }>
                    <Route path=StaticSegment("") view=HomeRedirect/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("employee"), StaticSegment("dashboard"))
                        view=|| view! {
                            <Guarded access=RouteAccess::EmployeeOnly>
                                <EmployeeDashboardPage/>
                            </Guarded>
                        }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! {
                            <Guarded access=RouteAccess::AdminOnly>
                                <AdminDashboardPage/>
                            </Guarded>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
