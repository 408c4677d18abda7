//! Settings Persistence
//!
//! User settings live in `localStorage` as JSON.

use gravita_core::{Settings, Theme};

const SETTINGS_KEY: &str = "gravita.settings";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_settings() -> Settings {
    local_storage()
        .and_then(|storage| storage.get_item(SETTINGS_KEY).ok().flatten())
        .map(|raw| Settings::from_json(&raw))
        .unwrap_or_default()
}

pub fn save_settings(settings: &Settings) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, settings not saved");
        return;
    };
    if storage.set_item(SETTINGS_KEY, &settings.to_json()).is_err() {
        log::warn!("failed to write {}", SETTINGS_KEY);
    }
}

/// Reflect the theme on `<html data-theme=...>`
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}
