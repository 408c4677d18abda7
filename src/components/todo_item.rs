//! Todo Item Component
//!
//! One row of the task list.

use leptos::prelude::*;

use gravita_core::{Task, TaskId};

use crate::components::{ConfirmButton, TodoEditForm};
use crate::context::use_app_context;

fn time_range(task: &Task) -> Option<String> {
    match (&task.start_time, &task.end_time) {
        (Some(start), Some(end)) => Some(format!("{} - {}", start, end)),
        (Some(start), None) => Some(format!("from {}", start)),
        (None, Some(end)) => Some(format!("until {}", end)),
        (None, None) => None,
    }
}

/// Quadrant code tinted with the quadrant colors
#[component]
pub fn QuadrantBadge(task: Task) -> impl IntoView {
    task.quadrant().map(|quadrant| {
        let info = quadrant.info();
        view! {
            <span
                class="quadrant-badge"
                style=format!("background: {}; color: {}", info.fill, info.color)
                title=info.label
            >
                {info.code}
            </span>
        }
    })
}

#[component]
pub fn TodoItem(task: Task, id: TaskId) -> impl IntoView {
    let ctx = use_app_context();
    let completed = task.completed;

    let toggle = move |_| ctx.run(move |c| async move { c.toggle_complete(id).await });
    let delete = move |_| ctx.run(move |c| async move { c.delete(id).await });
    let start_edit = move |_| ctx.editing.set(Some(id));

    let row_task = task.clone();
    let row = move || {
        let task = row_task.clone();
        let times = time_range(&task);
        view! {
            <div class="todo-row">
                <input type="checkbox" prop:checked=completed on:change=toggle />
                <span class="todo-title" on:dblclick=start_edit>{task.title.clone()}</span>
                <QuadrantBadge task=task.clone() />
                {times.map(|range| view! { <span class="todo-time">{range}</span> })}
                <button class="edit-btn" title="Edit" on:click=start_edit>"✎"</button>
                <ConfirmButton button_class="delete-btn" on_confirm=delete />
            </div>
            {task.description.map(|text| view! { <p class="todo-description">{text}</p> })}
        }
    };

    view! {
        <li class=if completed { "todo-item completed" } else { "todo-item" }>
            <Show when=move || ctx.editing.get() == Some(id) fallback=row>
                <TodoEditForm task=task.clone() id=id />
            </Show>
        </li>
    }
}
