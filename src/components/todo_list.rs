//! Todo List Component
//!
//! The active tasks with completion and time-range filters.

use leptos::prelude::*;

use gravita_core::board::{filter_tasks, TaskFilter};

use crate::components::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

const STATUS_FILTERS: &[(Option<bool>, &str)] = &[
    (None, "All"),
    (Some(false), "Open"),
    (Some(true), "Done"),
];

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();
    let filter = RwSignal::new(TaskFilter::default());

    let visible = move || filter_tasks(&store.tasks().read(), filter.get());

    view! {
        <section class="todo-list">
            <div class="filter-bar">
                {STATUS_FILTERS.iter().map(|&(status, label)| {
                    let is_active = move || filter.get().completed == status;
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| filter.update(|f| f.completed = status)
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
                <label class="filter-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.get().has_time_range
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            filter.update(|f| f.has_time_range = checked);
                        }
                    />
                    " Scheduled only"
                </label>
            </div>

            <ul class="todo-items">
                <For
                    each=visible
                    // Every field that changes the row must be in the key
                    key=|task| (task.id, task.completed, task.title.clone(), task.importance_score, task.urgency_score, task.start_time.clone(), task.end_time.clone(), task.description.clone())
                    children=move |task| {
                        match task.id {
                            Some(id) => view! { <TodoItem task=task id=id /> }.into_any(),
                            None => ().into_any(),
                        }
                    }
                />
            </ul>
            <Show when=move || visible().is_empty()>
                <p class="empty-hint">"Nothing here yet."</p>
            </Show>
        </section>
    }
}
