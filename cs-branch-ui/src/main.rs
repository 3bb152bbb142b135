//! IEEE CS KARE Student Branch
//!
//! Single-page website built with Leptos (WASM).
//!
//! # Pages
//!
//! - Home, About, Events, Team, Achievements, Gallery, Contact
//!
//! # Architecture
//!
//! Client-side rendered Leptos application. All content comes from the
//! static catalog in the `cs-branch` library, which also owns the filter,
//! carousel and animation state; components here only wire that state to
//! signals, timers and the DOM.

use leptos::*;

mod app;
mod components;
mod dom;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
