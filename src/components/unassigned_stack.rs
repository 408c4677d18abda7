//! Unassigned Stack Component
//!
//! Tasks without scores, newest first. Drag one onto the canvas to
//! classify it.

use leptos::prelude::*;

use gravita_core::Task;
use leptos_dragdrop::{make_on_mousedown, DragOrigin};

use crate::components::use_board_drag;

#[component]
pub fn UnassignedStack(#[prop(into)] tasks: Signal<Vec<Task>>) -> impl IntoView {
    let board = use_board_drag();
    let drag = board.drag;

    view! {
        <aside class="unassigned-stack">
            <h3>{move || format!("Unassigned ({})", tasks.get().len())}</h3>
            <ul>
                <For
                    each=move || tasks.get()
                    key=|task| (task.id, task.title.clone())
                    children=move |task| {
                        let Some(id) = task.id else {
                            return ().into_any();
                        };
                        let class = move || {
                            if drag.is_dragging(id.0) { "stack-card dragging" } else { "stack-card" }
                        };
                        view! {
                            <li
                                class=class
                                title="Drag onto the board"
                                on:mousedown=make_on_mousedown(drag, id.0, DragOrigin::Outside)
                            >
                                {task.title.clone()}
                            </li>
                        }
                        .into_any()
                    }
                />
            </ul>
            <Show when=move || tasks.get().is_empty()>
                <p class="empty-hint">"Every task has a place."</p>
            </Show>
        </aside>
    }
}
