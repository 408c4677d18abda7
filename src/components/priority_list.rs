//! Priority List Component
//!
//! Tasks on the board, highest priority first.

use leptos::prelude::*;

use gravita_core::priority::{sort_by_priority, DEFAULT_PRIORITY};
use gravita_core::Task;

use crate::components::QuadrantBadge;
use crate::context::use_app_context;

#[component]
pub fn PriorityList(#[prop(into)] tasks: Signal<Vec<Task>>) -> impl IntoView {
    let ctx = use_app_context();

    let ranked = move || {
        let mut tasks = tasks.get();
        sort_by_priority(&mut tasks);
        tasks
    };

    view! {
        <aside class="priority-list">
            <h3>"By priority"</h3>
            <ol>
                <For
                    each=ranked
                    key=|task| (task.id, task.final_priority, task.importance_score, task.urgency_score, task.title.clone())
                    children=move |task| {
                        let id = task.id;
                        let priority = task.final_priority.unwrap_or(DEFAULT_PRIORITY);
                        view! {
                            <li
                                class=move || if id.is_some() && ctx.selected.get() == id { "priority-row selected" } else { "priority-row" }
                                on:click=move |_| ctx.selected.set(id)
                            >
                                <QuadrantBadge task=task.clone() />
                                <span class="priority-title">{task.title.clone()}</span>
                                <span class="priority-score">{priority}</span>
                            </li>
                        }
                    }
                />
            </ol>
        </aside>
    }
}
