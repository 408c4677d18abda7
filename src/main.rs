//! TodoGravita Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod settings;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();
    mount_to_body(App);
}
