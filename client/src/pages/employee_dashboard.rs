//! Employee dashboard: submit a daily log, browse history and tasks.

#[cfg(test)]
#[path = "employee_dashboard_test.rs"]
mod employee_dashboard_test;

use leptos::prelude::*;
use tracker::Session;
use tracker::wire::Task;

use crate::components::log_history::LogHistory;
use crate::components::time_log_form::TimeLogForm;
use crate::net::api;
use crate::state::auth::AuthHandle;

pub const TASKS_LOAD_FAILED: &str =
    "Failed to load tasks. Please ensure the backend is running and the API is accessible.";
pub const LOGS_LOAD_FAILED: &str = "Failed to load log history.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    History,
    Tasks,
}

impl DashboardTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::History => "Your Log History",
            Self::Tasks => "Available Tasks",
        }
    }
}

pub fn welcome_heading(session: &Session) -> String {
    match session.user() {
        Some(user) => format!("Welcome, {}!", user.email),
        None => "Welcome!".to_owned(),
    }
}

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let token = auth.token().unwrap_or_default();

    let tasks = {
        let token = token.clone();
        LocalResource::new(move || api::fetch_tasks(token.clone()))
    };
    let logs = LocalResource::new(move || api::fetch_logs(token.clone()));
    let on_logged = Callback::new(move |()| logs.refetch());
    let tab = RwSignal::new(DashboardTab::History);

    let tab_button = move |which: DashboardTab| {
        view! {
            <button
                class=move || if tab.get() == which { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                on:click=move |_| tab.set(which)
            >
                {which.label()}
            </button>
        }
    };

    view! {
        <div class="dashboard">
            <h1>{move || welcome_heading(&auth.session())}</h1>
            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    tasks
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! {
                                <div class="dashboard__columns">
                                    <section class="card">
                                        <h3>"Submit Daily Log"</h3>
                                        <TimeLogForm tasks=list.clone() on_logged=on_logged/>
                                    </section>
                                    <section class="card">
                                        <div class="tabs">
                                            {tab_button(DashboardTab::History)}
                                            {tab_button(DashboardTab::Tasks)}
                                        </div>
                                        <Show
                                            when=move || tab.get() == DashboardTab::History
                                            fallback={
                                                let list = list.clone();
                                                move || view! { <TaskList tasks=list.clone()/> }
                                            }
                                        >
                                            <HistoryPanel logs=logs/>
                                        </Show>
                                    </section>
                                </div>
                            }
                            .into_any(),
                            Err(e) => {
                                leptos::logging::warn!("task fetch failed: {e}");
                                view! { <p class="alert alert--error">{TASKS_LOAD_FAILED}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn HistoryPanel(logs: LocalResource<Result<Vec<tracker::wire::TimeLog>, String>>) -> impl IntoView {
    view! {
        <Suspense fallback=move || view! { <p>"Loading History..."</p> }>
            {move || {
                logs.get()
                    .map(|result| match result {
                        Ok(list) => view! { <LogHistory logs=list/> }.into_any(),
                        Err(e) => {
                            leptos::logging::warn!("log fetch failed: {e}");
                            view! { <p class="alert alert--error">{LOGS_LOAD_FAILED}</p> }.into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

#[component]
fn TaskList(tasks: Vec<Task>) -> impl IntoView {
    if tasks.is_empty() {
        return view! {
            <p class="muted">"No active tasks available. Contact your administrator."</p>
        }
        .into_any();
    }
    view! {
        <ul class="task-list">
            {tasks.into_iter().map(|t| view! { <li>{t.task_name}</li> }).collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
