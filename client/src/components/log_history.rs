//! Personal log history table.

use leptos::prelude::*;
use tracker::forms;
use tracker::wire::TimeLog;

pub const EMPTY_HISTORY_MESSAGE: &str = "No log history found. Submit your first work log!";

#[component]
pub fn LogHistory(logs: Vec<TimeLog>) -> impl IntoView {
    if logs.is_empty() {
        return view! { <p class="alert alert--info">{EMPTY_HISTORY_MESSAGE}</p> }.into_any();
    }

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Task"</th>
                    <th>"Time Spent"</th>
                    <th>"Description"</th>
                </tr>
            </thead>
            <tbody>
                {logs
                    .into_iter()
                    .map(|log| {
                        view! {
                            <tr>
                                <td>{forms::format_date(log.work_date.as_deref())}</td>
                                <td>{log.task_name}</td>
                                <td>{forms::format_hours(log.hours_logged)}</td>
                                <td title=log.description.clone()>{forms::summarize(&log.description)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
