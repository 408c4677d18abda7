//! Settings Panel Component

use leptos::prelude::*;

use gravita_core::Theme;

use crate::context::use_app_context;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_app_context();

    let toggle_theme = move |_| {
        let mut settings = ctx.settings.get_untracked();
        settings.theme = settings.theme.toggled();
        ctx.update_settings(settings);
    };
    let set_auto_trash = move |ev: web_sys::Event| {
        let mut settings = ctx.settings.get_untracked();
        settings.auto_trash = event_target_checked(&ev);
        ctx.update_settings(settings);
    };

    view! {
        <Show when=move || ctx.settings_open.get()>
            <div class="settings-panel">
                <h2>"Settings"</h2>
                <button class="theme-btn" on:click=toggle_theme>
                    {move || match ctx.settings.get().theme {
                        Theme::Light => "🌙 Dark theme",
                        Theme::Dark => "☀ Light theme",
                    }}
                </button>
                <label class="setting-row">
                    <input
                        type="checkbox"
                        prop:checked=move || ctx.settings.get().auto_trash
                        on:change=set_auto_trash
                    />
                    " Move completed tasks to the recycle bin"
                </label>
            </div>
        </Show>
    }
}
