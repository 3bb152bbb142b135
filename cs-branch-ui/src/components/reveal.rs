//! Fade-in-on-scroll wrapper

use cs_branch::animation::reveal::REVEAL_THRESHOLD;
use leptos::*;

use crate::dom::VisibilityWatch;

fn reveal_class(visible: bool, extra: &str) -> String {
    let state = if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    };
    format!(
        "transition-all duration-1000 ease-out transform will-change-transform {} {}",
        state, extra
    )
}

/// Slides its children up into view the first time they become visible.
/// `delay` staggers the transition in milliseconds.
#[component]
pub fn RevealOnScroll(
    children: Children,
    #[prop(optional)] delay: u32,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let node = create_node_ref::<html::Div>();
    let (visible, set_visible) = create_signal(false);
    let watch = store_value(None::<VisibilityWatch>);

    node.on_load(move |el| {
        let observed = VisibilityWatch::observe(&el, REVEAL_THRESHOLD, None, move || {
            set_visible.set(true)
        });
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
        <div
            node_ref=node
            class=move || reveal_class(visible.get(), &class)
            style=format!("transition-delay: {}ms", delay)
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class() {
        assert!(reveal_class(false, "").contains("opacity-0"));
        assert!(reveal_class(true, "h-full").contains("opacity-100"));
        assert!(reveal_class(true, "h-full").ends_with("h-full"));
    }
}
