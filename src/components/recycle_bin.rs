//! Recycle Bin Component
//!
//! Modal listing soft-deleted tasks with restore, batch restore,
//! permanent delete and clear.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gravita_core::{Task, TaskId};

use crate::components::ConfirmButton;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn RecycledRow(task: Task, selection: RwSignal<Vec<TaskId>>) -> impl IntoView {
    let ctx = use_app_context();
    let id = task.id;
    let is_selected = move || id.is_some_and(|id| selection.get().contains(&id));

    let toggle_selected = move |_| {
        let Some(id) = id else { return };
        selection.update(|ids| {
            if let Some(pos) = ids.iter().position(|selected| *selected == id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
        });
    };

    let restore_task = task.clone();
    let restore = move |_| {
        let task = restore_task.clone();
        ctx.run(move |c| async move { c.restore(&task).await });
    };
    let purge = move |_| {
        if let Some(id) = id {
            selection.update(|ids| ids.retain(|selected| *selected != id));
            ctx.run(move |c| async move { c.purge(id).await });
        }
    };

    view! {
        <li class="recycled-row">
            <input type="checkbox" prop:checked=is_selected on:change=toggle_selected />
            <span class="recycled-title">{task.title.clone()}</span>
            {task.updated_at.clone().map(|at| view! { <span class="recycled-at">{at}</span> })}
            <button class="restore-btn" on:click=restore>"Restore"</button>
            <ConfirmButton button_class="purge-btn" label="Delete" prompt="Delete forever?" on_confirm=purge />
        </li>
    }
}

#[component]
pub fn RecycleBin() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let selection = RwSignal::new(Vec::<TaskId>::new());

    // Refresh whenever the modal opens
    Effect::new(move |_| {
        if ctx.recycle_bin_open.get() {
            selection.set(Vec::new());
            ctx.run(|c| async move { c.load_recycle_bin().await });
        }
    });

    let restore_selected = move |_| {
        let ids = selection.get_untracked();
        let controller = ctx.controller();
        spawn_local(async move {
            controller.batch_restore(&ids).await;
            selection.set(Vec::new());
        });
    };
    let clear = move |_| {
        selection.set(Vec::new());
        ctx.run(|c| async move { c.clear_recycle_bin().await });
    };
    let close = move |_| ctx.recycle_bin_open.set(false);

    view! {
        <Show when=move || ctx.recycle_bin_open.get()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal recycle-bin" on:click=|ev| ev.stop_propagation()>
                    <header class="modal-header">
                        <h2>"Recycle bin"</h2>
                        <button class="close-btn" on:click=close>"✕"</button>
                    </header>

                    <ul class="recycled-items">
                        <For
                            each=move || store.recycled().get()
                            key=|task| (task.id, task.title.clone())
                            children=move |task| view! { <RecycledRow task=task selection=selection /> }
                        />
                    </ul>
                    <Show when=move || store.recycled().read().is_empty()>
                        <p class="empty-hint">"The recycle bin is empty."</p>
                    </Show>

                    <footer class="modal-actions">
                        <button
                            class="restore-btn"
                            disabled=move || selection.get().is_empty()
                            on:click=restore_selected
                        >
                            {move || format!("Restore selected ({})", selection.get().len())}
                        </button>
                        <ConfirmButton
                            button_class="clear-btn"
                            label="Empty bin"
                            prompt="Delete everything?"
                            on_confirm=clear
                        />
                    </footer>
                </div>
            </div>
        </Show>
    }
}
