//! Todo Edit Form Component
//!
//! Inline editor for an existing task, including its scores.

use leptos::prelude::*;

use gravita_core::quadrant::{SCORE_MAX, SCORE_MIN};
use gravita_core::validation;
use gravita_core::{Task, TaskDraft, TaskId};

use crate::context::use_app_context;

fn score_value(score: Option<i32>) -> String {
    score.map(|s| s.to_string()).unwrap_or_default()
}

/// Blank select value means "unclassified"
fn parse_score(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

#[component]
fn ScoreSelect(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <label class="score-select">
            {label}
            <select on:change=move |ev| set_value.set(event_target_value(&ev))>
                <option value="" prop:selected=move || value.get().is_empty()>"-"</option>
                {(SCORE_MIN..=SCORE_MAX)
                    .map(|score| {
                        let raw = score.to_string();
                        let current = raw.clone();
                        view! {
                            <option value=raw prop:selected=move || value.get() == current>
                                {score}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn TodoEditForm(task: Task, id: TaskId) -> impl IntoView {
    let ctx = use_app_context();
    let seed = TaskDraft::from_task(&task);

    let (title, set_title) = signal(seed.title.clone());
    let (description, set_description) = signal(seed.description.clone().unwrap_or_default());
    let (start_time, set_start_time) = signal(seed.start_time.clone().unwrap_or_default());
    let (end_time, set_end_time) = signal(seed.end_time.clone().unwrap_or_default());
    let (importance, set_importance) = signal(score_value(seed.importance_score));
    let (urgency, set_urgency) = signal(score_value(seed.urgency_score));
    let (error, set_error) = signal(None::<String>);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TaskDraft::from_form(
            &title.get_untracked(),
            &description.get_untracked(),
            &start_time.get_untracked(),
            &end_time.get_untracked(),
        )
        .with_scores(
            parse_score(&importance.get_untracked()),
            parse_score(&urgency.get_untracked()),
        );

        // Invalid drafts keep the form open with the message inline
        if let Err(err) = validation::validate(&draft) {
            set_error.set(Some(err.to_string()));
            return;
        }
        ctx.editing.set(None);
        ctx.run(move |c| async move { c.edit(id, draft).await });
    };

    view! {
        <form class="todo-edit-form" on:submit=save>
            <input
                type="text"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <div class="todo-form-times">
                <input
                    type="time"
                    prop:value=move || start_time.get()
                    on:input=move |ev| set_start_time.set(event_target_value(&ev))
                />
                <input
                    type="time"
                    prop:value=move || end_time.get()
                    on:input=move |ev| set_end_time.set(event_target_value(&ev))
                />
            </div>
            <div class="todo-form-scores">
                <ScoreSelect label="Importance " value=importance set_value=set_importance />
                <ScoreSelect label="Urgency " value=urgency set_value=set_urgency />
            </div>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <div class="todo-form-actions">
                <button type="submit">"Save"</button>
                <button type="button" class="cancel-btn" on:click=move |_| ctx.editing.set(None)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
