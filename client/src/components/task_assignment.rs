//! Admin form for creating a task and assigning it to an employee.

use leptos::prelude::*;
use tracker::forms;
use tracker::wire::AdminUser;

use crate::state::auth::AuthHandle;

#[component]
pub fn TaskAssignment(employees: Vec<AdminUser>) -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let assignee = RwSignal::new(String::new());
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

        let task = match forms::validate_task_assignment(
            &name.get_untracked(),
            &description.get_untracked(),
            &assignee.get_untracked(),
        ) {
            Ok(task) => task,
            Err(e) => {
                error.set(e.to_string());
                return;
            }
        };
        let Some(token) = auth.token() else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let summary = format!("Task \"{}\" assigned.", task.task_name);
            match crate::net::api::assign_task(token, task).await {
                Ok(()) => {
                    message.set(summary);
                    name.set(String::new());
                    description.set(String::new());
                    assignee.set(String::new());
                }
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, task);
        }
    };

    view! {
        <form class="form" on:submit=on_submit>
            <Show when=move || !error.get().is_empty()>
                <p class="alert alert--error">{move || error.get()}</p>
            </Show>
            <Show when=move || !message.get().is_empty()>
                <p class="alert alert--success">{move || message.get()}</p>
            </Show>

            <label class="form__label">"Task Name (optional)"</label>
            <input
                class="form__input"
                type="text"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />

            <label class="form__label">"Task Description"</label>
            <textarea
                class="form__input"
                rows="3"
                placeholder="Describe the task..."
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>

            <label class="form__label">"Assign to Employee"</label>
            <select
                class="form__input"
                prop:value=move || assignee.get()
                on:change=move |ev| assignee.set(event_target_value(&ev))
            >
                <option value="">"Select Employee"</option>
                {employees
                    .into_iter()
                    .map(|u| view! { <option value=u.user_id>{u.email}</option> })
                    .collect::<Vec<_>>()}
            </select>

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Assigning..." } else { "Assign Task" }}
            </button>
        </form>
    }
}
