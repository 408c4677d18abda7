//! Quadrant Board Component
//!
//! Importance/urgency canvas with draggable task points.
//! Uses leptos-dragdrop for the mouse handling; drops become
//! `reposition` calls on the controller.

use leptos::html;
use leptos::prelude::*;

use gravita_core::board::partition;
use gravita_core::priority::estimate_priority;
use gravita_core::quadrant::{placement, scores_at};
use gravita_core::{Quadrant, Task, TaskId};
use leptos_dragdrop::*;

use crate::components::{PriorityList, UnassignedStack};
use crate::context::{use_app_context, AppContext};
use crate::store::{use_app_store, AppStateStoreFields};

/// Drag state shared by the canvas and the unassigned stack
#[derive(Clone, Copy)]
pub struct BoardDrag {
    pub drag: DragSignals,
    pub canvas: NodeRef<html::Div>,
}

pub fn use_board_drag() -> BoardDrag {
    expect_context::<BoardDrag>()
}

/// Bind the document-level drag handlers once for the app's lifetime
pub fn provide_board_drag(ctx: AppContext) {
    let drag = create_drag_signals();
    let canvas = NodeRef::<html::Div>::new();

    let canvas_rect = move || {
        canvas
            .get_untracked()
            .map(|el| CanvasRect::from_dom(&el.get_bounding_client_rect()))
    };
    bind_canvas_drag(drag, canvas_rect, move |raw_id, point| {
        let id = TaskId(raw_id);
        let (importance, urgency) = scores_at(point.x, point.y);
        log::debug!("drop task {} at ({}, {})", id, importance, urgency);
        ctx.selected.set(Some(id));
        ctx.run(move |c| async move { c.reposition(id, importance, urgency).await });
    });

    provide_context(BoardDrag { drag, canvas });
}

/// Screen order: importance grows upwards, urgency to the right
const GRID_ORDER: [Quadrant; 4] = [Quadrant::Q2, Quadrant::Q1, Quadrant::Q4, Quadrant::Q3];

#[component]
fn TaskPoint(task: Task, id: TaskId) -> impl IntoView {
    let ctx = use_app_context();
    let BoardDrag { drag, .. } = use_board_drag();
    let (importance, urgency) = task.scores().unwrap_or_default();
    let (left, top) = placement(importance, urgency);
    let color = Quadrant::classify(importance, urgency).info().color;

    let is_dragging = move || drag.is_dragging(id.0);
    let style = move || {
        // While dragged the point follows the pointer; the ghost shows scores
        let (x, y) = match drag.pointer_read.get() {
            Some(point) if is_dragging() => (point.x, point.y),
            _ => (left, top),
        };
        format!("left: {:.2}%; top: {:.2}%; background: {};", x, y, color)
    };
    let class = move || {
        let mut class = String::from("task-point");
        if is_dragging() {
            class.push_str(" dragging");
        }
        if ctx.selected.get() == Some(id) {
            class.push_str(" selected");
        }
        class
    };

    view! {
        <div
            class=class
            style=style
            title=task.title.clone()
            on:mousedown=make_on_mousedown(drag, id.0, DragOrigin::Canvas)
            on:click=move |_| {
                if !drag.drag_just_ended_read.get_untracked() {
                    ctx.selected.set(Some(id));
                }
            }
        >
            <span class="task-point-label">{task.title.clone()}</span>
        </div>
    }
}

/// Score readout under the pointer while dragging
#[component]
fn DropPreview() -> impl IntoView {
    let BoardDrag { drag, .. } = use_board_drag();

    move || {
        let dragging = drag.dragging_read.get().is_some();
        drag.pointer_read.get().filter(|_| dragging).map(|point| {
            let (importance, urgency) = scores_at(point.x, point.y);
            let info = Quadrant::classify(importance, urgency).info();
            let priority = estimate_priority(importance, urgency).ok();
            view! {
                <div
                    class="drop-preview"
                    style=format!("left: {:.2}%; top: {:.2}%; border-color: {};", point.x, point.y, info.color)
                >
                    {format!("{} · importance {} · urgency {}", info.code, importance, urgency)}
                    {priority.map(|p| format!(" · priority {}", p))}
                </div>
            }
        })
    }
}

#[component]
pub fn QuadrantBoard() -> impl IntoView {
    let store = use_app_store();
    let BoardDrag { drag, canvas } = use_board_drag();

    let board = Memo::new(move |_| partition(&store.tasks().read()));
    let hidden_count = move || board.get().hidden.len();

    view! {
        <section class="quadrant-view">
            <UnassignedStack tasks=Signal::derive(move || board.get().unassigned) />

            <div class="quadrant-main">
                <div class="axis-label importance">"Importance ↑"</div>
                <div
                    class=move || if drag.dragging_read.get().is_some() { "quadrant-canvas dragging" } else { "quadrant-canvas" }
                    node_ref=canvas
                >
                    {GRID_ORDER.iter().map(|quadrant| {
                        let info = quadrant.info();
                        view! {
                            <div
                                class="quadrant-cell"
                                style=format!("background: {}; border-color: {};", info.fill, info.color)
                            >
                                <span class="quadrant-label" style=format!("color: {}", info.color)>
                                    {info.code} " " {info.label}
                                </span>
                            </div>
                        }
                    }).collect_view()}

                    <For
                        each=move || board.get().visible
                        key=|task| (task.id, task.importance_score, task.urgency_score, task.title.clone())
                        children=move |task| {
                            match task.id {
                                Some(id) => view! { <TaskPoint task=task id=id /> }.into_any(),
                                None => ().into_any(),
                            }
                        }
                    />
                    <DropPreview />
                </div>
                <div class="axis-label urgency">"Urgency →"</div>
                <Show when=move || { hidden_count() > 0 }>
                    <p class="hidden-hint">{move || format!("{} completed tasks hidden", hidden_count())}</p>
                </Show>
            </div>

            <PriorityList tasks=Signal::derive(move || board.get().visible) />
        </section>
    }
}
