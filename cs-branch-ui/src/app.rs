//! App Root Component
//!
//! Routing, the page layout shared by every route, and the scroll manager.

use std::time::Duration;

use cs_branch::scroll::{classify_anchor_click, AnchorClick, ScrollTarget, SETTLE_DELAY_MS};
use leptos::*;
use leptos_router::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::components::{Footer, Navbar};
use crate::dom;
use crate::pages::{About, Achievements, Contact, Events, Gallery, Home, Team};
use crate::state::provide_theme_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_theme_state();

    view! {
        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/about" view=About />
                    <Route path="/events" view=Events />
                    <Route path="/team" view=Team />
                    <Route path="/achievements" view=Achievements />
                    <Route path="/gallery" view=Gallery />
                    <Route path="/contact" view=Contact />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </Layout>
        </Router>
    }
}

/// Header, page body and footer
#[component]
fn Layout(children: Children) -> impl IntoView {
    use_route_scrolling();
    use_anchor_scrolling();

    view! {
        <div class="flex flex-col min-h-screen">
            <Navbar />
            <main class="flex-grow">{children()}</main>
            <Footer />
        </div>
    }
}

/// After every path or hash change, wait for the new page to render and
/// scroll to the hash target (or the top)
fn use_route_scrolling() {
    let location = use_location();
    let pending = store_value(None::<TimeoutHandle>);

    create_effect(move |_| {
        let _path = location.pathname.get();
        let target = ScrollTarget::from_hash(&location.hash.get());

        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || dom::scroll_to_target(&target),
            Duration::from_millis(u64::from(SETTLE_DELAY_MS)),
        )
        .ok();
        pending.set_value(handle);
    });

    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });
}

/// Smooth-scroll same-page anchor clicks, including clicks on a link to the
/// hash that is already current
fn use_anchor_scrolling() {
    let listener = window_event_listener(ev::click, |ev| {
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        else {
            return;
        };
        let Ok(current) = window().location().href() else {
            return;
        };

        match classify_anchor_click(&anchor.href(), &current, ev.default_prevented()) {
            AnchorClick::Ignore => {}
            AnchorClick::Intercept { hash, target } => {
                ev.prevent_default();
                if let Ok(history) = window().history() {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&hash));
                }
                dom::scroll_to_target(&ScrollTarget::Element(target));
            }
            AnchorClick::Rescroll { target } => {
                dom::scroll_to_target(&ScrollTarget::Element(target));
            }
        }
    });

    on_cleanup(move || listener.remove());
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[70vh] pt-24 text-center px-4">
            <div class="text-7xl font-black text-[#FFB347] mb-4">"404"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 dark:text-gray-400 mb-8">
                "The page you're looking for doesn't exist."
            </p>
            <A
                href="/"
                class="px-8 py-3 rounded-full bg-[#FFB347] text-black font-bold text-sm uppercase tracking-wider hover:bg-[#ffaa33] transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
