//! Todo Form Component
//!
//! Form for creating new tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gravita_core::{validation, Outcome, TaskDraft};

use crate::context::use_app_context;

/// Form for creating new tasks; nothing is sent until the draft validates
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (start_time, set_start_time) = signal(String::new());
    let (end_time, set_end_time) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = TaskDraft::from_form(
            &title.get_untracked(),
            &description.get_untracked(),
            &start_time.get_untracked(),
            &end_time.get_untracked(),
        );
        if let Err(err) = validation::validate(&draft) {
            set_error.set(Some(err.to_string()));
            return;
        }
        set_error.set(None);

        let controller = ctx.controller();
        set_submitting.set(true);
        spawn_local(async move {
            if controller.create(draft).await == Outcome::Confirmed {
                set_title.set(String::new());
                set_description.set(String::new());
                set_start_time.set(String::new());
                set_end_time.set(String::new());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="todo-form" on:submit=create_task>
            <div class="todo-form-row">
                <input
                    type="text"
                    placeholder="Add a task..."
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || submitting.get()>"Add"</button>
            </div>
            <textarea
                class="todo-form-description"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <div class="todo-form-times">
                <label>
                    "Start "
                    <input
                        type="time"
                        prop:value=move || start_time.get()
                        on:input=move |ev| set_start_time.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "End "
                    <input
                        type="time"
                        prop:value=move || end_time.get()
                        on:input=move |ev| set_end_time.set(event_target_value(&ev))
                    />
                </label>
            </div>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
        </form>
    }
}
