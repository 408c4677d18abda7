//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use gravita_core::mutation::TaskStore;
use gravita_core::Task;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active tasks in server order
    pub tasks: Vec<Task>,
    /// Recycle bin contents
    pub recycled: Vec<Task>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Active,
    Recycled,
}

/// One list of the store, as the mutation controller sees it
#[derive(Clone, Copy)]
pub struct StoreSlice {
    store: AppStore,
    collection: Collection,
}

impl StoreSlice {
    pub fn new(store: AppStore, collection: Collection) -> Self {
        Self { store, collection }
    }
}

impl TaskStore for StoreSlice {
    fn read<R>(&self, f: impl FnOnce(&[Task]) -> R) -> R {
        match self.collection {
            Collection::Active => f(&self.store.tasks().read_untracked()),
            Collection::Recycled => f(&self.store.recycled().read_untracked()),
        }
    }

    fn modify<R>(&self, f: impl FnOnce(&mut Vec<Task>) -> R) -> R {
        match self.collection {
            Collection::Active => f(&mut self.store.tasks().write()),
            Collection::Recycled => f(&mut self.store.recycled().write()),
        }
    }
}
