//! Deferred image loading
//!
//! The `<img>` is only created once its placeholder comes within
//! [`LAZY_IMAGE_ROOT_MARGIN`] of the viewport, then fades in when the browser
//! has decoded it.

use cs_branch::animation::reveal::{LAZY_IMAGE_ROOT_MARGIN, LAZY_IMAGE_THRESHOLD};
use leptos::*;

use crate::dom::VisibilityWatch;

fn image_class(loaded: bool) -> &'static str {
    if loaded {
        "w-full h-full object-cover transition-all duration-700 ease-out opacity-100 scale-100 blur-0"
    } else {
        "w-full h-full object-cover transition-all duration-700 ease-out opacity-0 scale-110 blur-lg"
    }
}

#[component]
pub fn LazyImage(
    src: &'static str,
    alt: &'static str,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let node = create_node_ref::<html::Div>();
    let (in_view, set_in_view) = create_signal(false);
    let (loaded, set_loaded) = create_signal(false);
    let watch = store_value(None::<VisibilityWatch>);

    node.on_load(move |el| {
        let observed = VisibilityWatch::observe(
            &el,
            LAZY_IMAGE_THRESHOLD,
            Some(LAZY_IMAGE_ROOT_MARGIN),
            move || set_in_view.set(true),
        );
        watch.set_value(observed);
    });
    on_cleanup(move || {
        watch.with_value(|w| {
            if let Some(w) = w {
                w.disconnect();
            }
        })
    });

    view! {
        <div node_ref=node class=format!("relative overflow-hidden bg-gray-200 dark:bg-gray-800 {}", class)>
            <Show when=move || in_view.get()>
                <img
                    src=src
                    alt=alt
                    decoding="async"
                    on:load=move |_| set_loaded.set(true)
                    class=move || image_class(loaded.get())
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_class() {
        assert!(image_class(false).contains("opacity-0"));
        assert!(image_class(true).contains("opacity-100"));
    }
}
