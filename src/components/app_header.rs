//! App Header Component
//!
//! Title, task counters, view switch and panel buttons.

use leptos::prelude::*;

use gravita_core::board::TaskStats;

use crate::context::{use_app_context, ViewMode};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let stats = Memo::new(move |_| {
        TaskStats::collect(&store.tasks().read(), &store.recycled().read())
    });

    let view_button = move |mode: ViewMode, label: &'static str| {
        view! {
            <button
                class=move || if ctx.view_mode.get() == mode { "view-btn active" } else { "view-btn" }
                on:click=move |_| ctx.view_mode.set(mode)
            >
                {label}
            </button>
        }
    };

    view! {
        <header class="app-header">
            <h1 class="app-title">"TodoGravita"</h1>

            <div class="task-stats">
                <span>{move || format!("{} tasks", stats.get().total)}</span>
                <span>{move || format!("{} done", stats.get().completed)}</span>
                <span>{move || format!("{} open", stats.get().pending)}</span>
            </div>

            <nav class="view-switch">
                {view_button(ViewMode::List, "List")}
                {view_button(ViewMode::Quadrant, "Quadrant")}
            </nav>

            <div class="header-actions">
                <button
                    class="header-btn recycle"
                    title="Recycle bin"
                    on:click=move |_| ctx.recycle_bin_open.set(true)
                >
                    "🗑 " {move || stats.get().recycle_bin}
                </button>
                <button
                    class="header-btn settings"
                    title="Settings"
                    on:click=move |_| ctx.settings_open.update(|open| *open = !*open)
                >
                    "⚙"
                </button>
            </div>
        </header>
    }
}
