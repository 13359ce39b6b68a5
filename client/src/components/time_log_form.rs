//! Daily time-log submission form.

use leptos::prelude::*;
use tracker::forms;
use tracker::wire::Task;

use crate::state::auth::AuthHandle;

pub const SUBMITTED_MESSAGE: &str = "Time log submitted successfully!";

#[component]
pub fn TimeLogForm(tasks: Vec<Task>, on_logged: Callback<()>) -> impl IntoView {
    let auth = expect_context::<AuthHandle>();
    let task = RwSignal::new(String::new());
    let hours = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
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

        let log = match forms::validate_time_log(
            &task.get_untracked(),
            &hours.get_untracked(),
            &description.get_untracked(),
        ) {
            Ok(log) => log,
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
            match crate::net::api::submit_log(token, log).await {
                Ok(()) => {
                    message.set(SUBMITTED_MESSAGE.to_owned());
                    task.set(String::new());
                    hours.set(String::new());
                    description.set(String::new());
                    on_logged.run(());
                }
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, log, on_logged);
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

            <label class="form__label">"Select Task"</label>
            <select
                class="form__input"
                prop:value=move || task.get()
                on:change=move |ev| task.set(event_target_value(&ev))
            >
                <option value="">"Choose..."</option>
                {tasks
                    .into_iter()
                    .map(|t| view! { <option value=t.task_id.to_string()>{t.task_name}</option> })
                    .collect::<Vec<_>>()}
            </select>

            <label class="form__label">"Time Spent (Hours)"</label>
            <input
                class="form__input"
                type="number"
                step="0.5"
                placeholder="e.g., 2.5"
                prop:value=move || hours.get()
                on:input=move |ev| hours.set(event_target_value(&ev))
            />

            <label class="form__label">"Description / Details"</label>
            <textarea
                class="form__input"
                rows="3"
                placeholder="Details about the work performed."
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Submitting..." } else { "Submit Work Log" }}
            </button>
        </form>
    }
}
