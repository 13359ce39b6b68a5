//! Registered accounts with approval actions.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;
use tracker::wire::AdminUser;

/// `2025-10-29T08:15:00.000Z` as `2025-10-29 08:15`.
pub fn format_created_at(created_at: Option<&str>) -> String {
    let Some(ts) = created_at.map(str::trim).filter(|ts| !ts.is_empty()) else {
        return "N/A".to_owned();
    };
    let minutes = ts.get(..16).unwrap_or(ts);
    minutes.replacen('T', " ", 1)
}

#[component]
pub fn UserTable(users: Vec<AdminUser>, on_approve: Callback<String>) -> impl IntoView {
    if users.is_empty() {
        return view! { <p class="alert alert--info">"No users found."</p> }.into_any();
    }

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"User ID"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                    <th>"Created At"</th>
                    <th>"Action"</th>
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|user| {
                        let pending = user.is_pending();
                        let user_id = user.user_id.clone();
                        view! {
                            <tr>
                                <td>{user.user_id}</td>
                                <td>{user.email}</td>
                                <td>{user.role}</td>
                                <td>{user.status}</td>
                                <td>{format_created_at(user.created_at.as_deref())}</td>
                                <td>
                                    {pending
                                        .then(move || {
                                            view! {
                                                <button
                                                    class="btn btn--success btn--small"
                                                    on:click=move |_| on_approve.run(user_id.clone())
                                                >
                                                    "Approve"
                                                </button>
                                            }
                                        })}
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
