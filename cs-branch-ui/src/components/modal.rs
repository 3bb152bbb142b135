//! Modal overlay
//!
//! Full-screen backdrop with a centered panel. Clicking the backdrop or
//! pressing Escape calls `on_close`; clicks inside the panel do not.

use leptos::*;

use crate::components::{Icon, IconKind};

#[component]
pub fn Modal(
    on_close: Callback<()>,
    children: Children,
    /// Panel classes (size, background, rounding)
    #[prop(into)]
    panel_class: String,
    /// Backdrop classes
    #[prop(into, default = "bg-black/70 backdrop-blur-sm".to_string())]
    backdrop_class: String,
) -> impl IntoView {
    let listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.call(());
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <div
            class=format!("fixed inset-0 z-[100] flex items-center justify-center p-4 md:p-8 fade-in {}", backdrop_class)
            on:click=move |_| on_close.call(())
        >
            <div
                class=format!("relative w-full max-h-[90vh] overflow-y-auto shadow-2xl {}", panel_class)
                on:click=|ev| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}

/// Round close button placed in a modal corner
#[component]
pub fn CloseButton(
    on_close: Callback<()>,
    #[prop(into, default = "absolute top-4 right-4 p-2 bg-black/40 hover:bg-black/60 text-white rounded-full backdrop-blur-md transition-colors z-20".to_string())]
    class: String,
) -> impl IntoView {
    view! {
        <button on:click=move |_| on_close.call(()) class=class aria-label="Close">
            <Icon kind=IconKind::Close />
        </button>
    }
}
