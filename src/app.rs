//! TodoGravita Frontend App
//!
//! Main application component: header, task form and the list or
//! quadrant view, plus the recycle bin, settings and toasts.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::RestClient;
use crate::components::{
    provide_board_drag, AppHeader, QuadrantBoard, RecycleBin, SettingsPanel, ToastHost, Toasts,
    TodoForm, TodoList,
};
use crate::config::api_base;
use crate::context::{AppContext, ViewMode};
use crate::settings::{apply_theme, load_settings};
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    let settings = load_settings();
    apply_theme(settings.theme);
    let settings = signal(settings);

    let base = api_base();
    log::info!("using backend at {}", base);

    let toasts = Toasts::new();
    let ctx = AppContext::new(RestClient::new(base), store, toasts, settings);
    provide_context(ctx);
    provide_board_drag(ctx);

    // Initial load
    ctx.run(|c| async move { c.load_tasks().await });
    ctx.run(|c| async move { c.load_recycle_bin().await });

    view! {
        <div class="app-layout">
            <AppHeader />
            <SettingsPanel />

            <main class="main-content">
                <TodoForm />
                {move || match ctx.view_mode.get() {
                    ViewMode::List => view! { <TodoList /> }.into_any(),
                    ViewMode::Quadrant => view! { <QuadrantBoard /> }.into_any(),
                }}
            </main>

            <RecycleBin />
            <ToastHost toasts=toasts />
        </div>
    }
}
