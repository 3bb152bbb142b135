//! Browser helpers
//!
//! Thin wrappers over `web_sys` for the handful of DOM calls the components
//! share: smooth scrolling, visibility observers and `localStorage`.

use cs_branch::animation::Reveal;
use cs_branch::scroll::{anchor_offset, ScrollTarget};
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions,
};

/// Smooth-scroll the window to a document offset
pub fn scroll_window_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Scroll to the top or to an element just below the fixed header.
/// Missing elements are ignored.
pub fn scroll_to_target(target: &ScrollTarget) {
    match target {
        ScrollTarget::Top => scroll_window_to(0.0),
        ScrollTarget::Element(id) => {
            if let Some(element) = document().get_element_by_id(id) {
                let top = element.get_bounding_client_rect().top();
                let scroll_y = window().scroll_y().unwrap_or(0.0);
                scroll_window_to(anchor_offset(top, scroll_y));
            }
        }
    }
}

/// Current vertical scroll position
pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Random typing delay in `[0, max_ms)`
pub fn jitter(max_ms: u32) -> u32 {
    (js_sys::Math::random() * f64::from(max_ms)) as u32
}

/// Milliseconds since page load, for animation timing
pub fn now_ms() -> f64 {
    window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Read a value from local storage
pub fn load_setting(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Write a value to local storage
pub fn save_setting(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(key, value).is_err() {
                web_sys::console::warn_1(&format!("Could not persist {}", key).into());
            }
        }
    }
}

/// Add or remove a class on the document root
pub fn set_root_class(class: &str, on: bool) {
    if let Some(root) = document().document_element() {
        let _ = root.class_list().toggle_with_force(class, on);
    }
}

/// One-shot visibility observer
///
/// Calls `on_visible` the first time the element intersects the viewport and
/// then disconnects. Dropping the watch leaves the observer running; call
/// [`VisibilityWatch::disconnect`] on unmount.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    pub fn observe(
        element: &web_sys::Element,
        threshold: f64,
        root_margin: Option<&str>,
        on_visible: impl FnOnce() + 'static,
    ) -> Option<Self> {
        let mut reveal = Reveal::default();
        let mut on_visible = Some(on_visible);

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                if reveal.observe(intersecting) {
                    observer.disconnect();
                    if let Some(f) = on_visible.take() {
                        f();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(element);
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(e) => {
                web_sys::console::error_1(&format!("IntersectionObserver unavailable: {:?}", e).into());
                None
            }
        }
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}
