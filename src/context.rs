//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use gravita_core::{MutationConfig, MutationController, Outcome, Settings, TaskId};

use crate::api::RestClient;
use crate::components::Toasts;
use crate::settings::{apply_theme, save_settings};
use crate::store::{AppStore, Collection, StoreSlice};

pub type Controller = MutationController<RestClient, StoreSlice, Toasts>;

/// Main view of the active tasks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Quadrant,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The controller is `Rc`-based, so it stays on this thread
    controller: StoredValue<Controller, LocalStorage>,
    pub toasts: Toasts,
    /// Persisted user settings - read
    pub settings: ReadSignal<Settings>,
    /// Persisted user settings - write
    set_settings: WriteSignal<Settings>,
    pub view_mode: RwSignal<ViewMode>,
    pub recycle_bin_open: RwSignal<bool>,
    pub settings_open: RwSignal<bool>,
    /// Task whose edit form is open
    pub editing: RwSignal<Option<TaskId>>,
    /// Task highlighted on the board
    pub selected: RwSignal<Option<TaskId>>,
}

impl AppContext {
    pub fn new(
        api: RestClient,
        store: AppStore,
        toasts: Toasts,
        settings: (ReadSignal<Settings>, WriteSignal<Settings>),
    ) -> Self {
        let config = MutationConfig::from(&settings.0.get_untracked());
        let controller = MutationController::new(
            Rc::new(api),
            StoreSlice::new(store, Collection::Active),
            StoreSlice::new(store, Collection::Recycled),
            toasts,
            config,
        );
        Self {
            controller: StoredValue::new_local(controller),
            toasts,
            settings: settings.0,
            set_settings: settings.1,
            view_mode: RwSignal::new(ViewMode::default()),
            recycle_bin_open: RwSignal::new(false),
            settings_open: RwSignal::new(false),
            editing: RwSignal::new(None),
            selected: RwSignal::new(None),
        }
    }

    pub fn controller(&self) -> Controller {
        self.controller.get_value()
    }

    /// Run a controller operation in the background
    pub fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(Controller) -> Fut,
        Fut: Future<Output = Outcome> + 'static,
    {
        let pending = op(self.controller());
        spawn_local(async move {
            let outcome = pending.await;
            log::debug!("mutation settled: {:?}", outcome);
        });
    }

    /// Persist settings and hand the new config to the controller
    pub fn update_settings(&self, settings: Settings) {
        save_settings(&settings);
        apply_theme(settings.theme);
        self.controller().set_config(MutationConfig::from(&settings));
        self.set_settings.set(settings);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
