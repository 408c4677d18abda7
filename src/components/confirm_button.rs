//! Two-step button for actions that discard tasks: moving one to the
//! bin, purging it from the bin, or emptying the bin.

use leptos::prelude::*;

/// First click arms the button and asks `prompt`; a second click on
/// "Yes" runs `on_confirm`. Leaving the control or pressing "No" disarms it.
#[component]
pub fn ConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "×".to_string())] label: String,
    #[prop(into, default = "Move to bin?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    let arm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(true);
    };
    let answer = move |ev: web_sys::MouseEvent, confirmed: bool| {
        ev.stop_propagation();
        armed.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button class=button_class.clone() on:click=arm>{label.clone()}</button>
            }
        >
            <span class="confirm-action" on:mouseleave=move |_| armed.set(false)>
                <span class="confirm-prompt">{prompt.clone()}</span>
                <button class="confirm-yes" on:click=move |ev| answer(ev, true)>"Yes"</button>
                <button class="confirm-no" on:click=move |ev| answer(ev, false)>"No"</button>
            </span>
        </Show>
    }
}
