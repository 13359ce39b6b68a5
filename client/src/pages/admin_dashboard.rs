//! Admin dashboard: approve pending accounts and assign tasks.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;
use tracker::forms;
use tracker::wire::{AdminUser, assignable_users};

use crate::components::task_assignment::TaskAssignment;
use crate::components::user_table::UserTable;
use crate::net::api;
use crate::state::auth::AuthHandle;

pub const USERS_LOAD_FAILED: &str = "Failed to load user data.";

/// "3 pending approval" style summary above the user table.
pub fn pending_summary(users: &[AdminUser]) -> String {
    match users.iter().filter(|u| u.is_pending()).count() {
        0 => "No accounts awaiting approval.".to_owned(),
        1 => "1 account awaiting approval.".to_owned(),
        n => format!("{n} accounts awaiting approval."),
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let token = auth.token().unwrap_or_default();
    let users = LocalResource::new(move || api::fetch_users(token.clone()));
    let notice = RwSignal::new(String::new());

    let on_approve = Callback::new(move |user_id: String| {
        let Some(token) = auth.token() else {
            return;
        };
        let user_id = match forms::validate_user_id(&user_id) {
            Ok(id) => id,
            Err(e) => {
                notice.set(e.to_string());
                return;
            }
        };
        notice.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api::approve_user(token, user_id.clone()).await {
                Ok(()) => {
                    notice.set(format!("Approved user {user_id}."));
                    users.refetch();
                }
                Err(e) => notice.set(e),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, user_id, users);
        }
    });

    view! {
        <div class="dashboard">
            <h1>"Admin Dashboard"</h1>
            <Show when=move || !notice.get().is_empty()>
                <p class="alert alert--info">{move || notice.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let employees: Vec<AdminUser> =
                                    assignable_users(&list).into_iter().cloned().collect();
                                view! {
                                    <section class="card">
                                        <h3>"Registered Users"</h3>
                                        <p class="muted">{pending_summary(&list)}</p>
                                        <UserTable users=list on_approve=on_approve/>
                                    </section>
                                    <section class="card">
                                        <h3>"Assign a New Task"</h3>
                                        <TaskAssignment employees=employees/>
                                    </section>
                                }
                                .into_any()
                            }
                            Err(e) => {
                                leptos::logging::warn!("user fetch failed: {e}");
                                view! { <p class="alert alert--error">{USERS_LOAD_FAILED}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
