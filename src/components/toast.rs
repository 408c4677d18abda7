//! Toast Notifications
//!
//! Transient notices raised by the mutation controller.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use gravita_core::{Notice, NoticeLevel, Notifier};

/// How long a toast stays on screen
const TOAST_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u32,
    notice: Notice,
}

/// Toast queue; also the controller's notifier
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }
}

impl Notifier for Toasts {
    fn notify(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.items.update(|items| items.push(Toast { id, notice }));

        let toasts = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            toasts.dismiss(id);
        });
    }
}

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "toast success",
        NoticeLevel::Error => "toast error",
        NoticeLevel::Info => "toast info",
    }
}

/// Renders the queue; click a toast to dismiss it early
#[component]
pub fn ToastHost(toasts: Toasts) -> impl IntoView {
    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=level_class(toast.notice.level)
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.notice.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
