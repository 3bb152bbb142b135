//! Gallery Carousel
//!
//! Horizontally scrolling strip of photo cards. The card nearest the strip
//! center is highlighted; arrow buttons step one card, and a timer advances
//! one card every few seconds (wrapping to the start) unless the pointer is
//! over the strip or a touch is in progress.
//!
//! Geometry is read from the DOM on demand into a
//! [`StripMetrics`](cs_branch::carousel::StripMetrics) snapshot, which does all
//! of the positioning math.

use std::time::Duration;

use cs_branch::carousel::{
    AutoAdvance, CardSpan, Direction, StripMetrics, AUTO_ADVANCE_INTERVAL_MS,
};
use cs_branch::catalog::{GalleryCollection, GalleryItem};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::components::{Icon, IconKind, LazyImage};

/// Snapshot the strip's scroll state and card positions
fn read_metrics(strip: &web_sys::HtmlElement) -> StripMetrics {
    let children = strip.children();
    let cards = (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|card| CardSpan {
            left: card.offset_left() as f64,
            width: card.offset_width() as f64,
        })
        .collect();

    StripMetrics {
        scroll_left: strip.scroll_left() as f64,
        viewport_width: strip.client_width() as f64,
        scroll_width: strip.scroll_width() as f64,
        cards,
    }
}

fn scroll_strip(strip: &web_sys::HtmlElement, left: f64) {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    strip.scroll_to_with_scroll_to_options(&options);
}

fn card_class(active: bool) -> &'static str {
    if active {
        "relative flex-shrink-0 w-[85vw] sm:w-[400px] aspect-[4/3] rounded-3xl overflow-hidden snap-center cursor-pointer group transition-all duration-700 scale-100 opacity-100 shadow-[0_20px_40px_-10px_rgba(31,41,55,0.4)] z-20 ring-4 ring-[#FFB347] ring-offset-4 ring-offset-white dark:ring-offset-[#0D0D0D]"
    } else {
        "relative flex-shrink-0 w-[85vw] sm:w-[400px] aspect-[4/3] rounded-3xl overflow-hidden snap-center cursor-pointer group transition-all duration-700 scale-90 opacity-60 hover:opacity-100 hover:scale-95 grayscale-[50%] hover:grayscale-0"
    }
}

fn caption_class(active: bool) -> &'static str {
    if active {
        "translate-y-0 opacity-100"
    } else {
        "translate-y-4 opacity-0 group-hover:translate-y-0 group-hover:opacity-100"
    }
}

#[component]
pub fn GalleryCarousel(
    collection: GalleryCollection,
    items: Vec<&'static GalleryItem>,
    /// Called with the clicked photo
    on_select: Callback<&'static GalleryItem>,
) -> impl IntoView {
    let strip_ref = create_node_ref::<html::Div>();
    let (active, set_active) = create_signal(0usize);
    let pause = create_rw_signal(AutoAdvance::default());
    let count = items.len();

    let metrics = move || strip_ref.get_untracked().map(|strip| read_metrics(&strip));

    let refresh_active = move || {
        if let Some(m) = metrics() {
            set_active.set(m.centered_index());
        }
    };

    let step = move |direction: Direction| {
        if let (Some(strip), Some(m)) = (strip_ref.get_untracked(), metrics()) {
            if let Some(left) = m.step(direction) {
                scroll_strip(&strip, left);
            }
        }
    };

    strip_ref.on_load(move |_| refresh_active());

    // Restart the timer whenever the pause state changes
    let timer = store_value(None::<IntervalHandle>);
    create_effect(move |_| {
        let state = pause.get();
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
        timer.set_value(None);
        if !state.should_advance(count) {
            return;
        }

        let handle = set_interval_with_handle(
            move || {
                if let (Some(strip), Some(m)) = (strip_ref.get_untracked(), metrics()) {
                    if let Some((_, left)) = m.advance_target() {
                        scroll_strip(&strip, left);
                    }
                }
            },
            Duration::from_millis(u64::from(AUTO_ADVANCE_INTERVAL_MS)),
        );
        match handle {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(e) => web_sys::console::error_1(&format!("Carousel timer failed: {:?}", e).into()),
        }
    });
    on_cleanup(move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
    });

    let cards = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let is_active = move || active.get() == index;
            view! {
                <div class=move || card_class(is_active()) on:click=move |_| on_select.call(item)>
                    <LazyImage src=item.src alt=item.caption class="w-full h-full" />
                    <div class=move || {
                        if is_active() {
                            "absolute inset-0 bg-gradient-to-t from-[#1F2937]/90 via-transparent to-transparent transition-opacity duration-500 opacity-100"
                        } else {
                            "absolute inset-0 bg-gradient-to-t from-[#1F2937]/90 via-transparent to-transparent transition-opacity duration-500 opacity-0 group-hover:opacity-100"
                        }
                    } />
                    <div class="absolute bottom-0 left-0 w-full p-6">
                        <span class=move || format!(
                            "inline-block px-3 py-1 bg-[#FFB347] text-[#1F2937] text-[10px] font-bold uppercase tracking-widest rounded-full mb-3 shadow-lg transform transition-all duration-500 delay-100 {}",
                            caption_class(is_active()),
                        )>{item.category}</span>
                        <h3 class=move || format!(
                            "text-white text-xl font-bold leading-tight transform transition-all duration-500 delay-200 {}",
                            caption_class(is_active()),
                        )>{item.caption}</h3>
                    </div>
                    <div class="absolute top-4 right-4 w-10 h-10 bg-white/20 backdrop-blur-md rounded-full flex items-center justify-center text-white opacity-0 group-hover:opacity-100 transition-opacity duration-300 border border-white/30">
                        <Icon kind=IconKind::ZoomIn size=18 />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            class="py-8"
            on:mouseenter=move |_| pause.update(|p| p.pointer_enter())
            on:mouseleave=move |_| pause.update(|p| p.pointer_leave())
            on:touchstart=move |_| pause.update(|p| p.touch_start())
            on:touchend=move |_| pause.update(|p| p.touch_end())
            on:touchcancel=move |_| pause.update(|p| p.touch_end())
        >
            <div class="flex flex-col md:flex-row justify-between items-end px-4 md:px-8 mb-8 gap-4">
                <div class="relative">
                    <h2 class="text-2xl md:text-4xl font-black text-[#1F2937] dark:text-white uppercase tracking-wider relative z-10">
                        {collection.label()}
                    </h2>
                    <div class="absolute -bottom-2 left-0 w-2/3 h-3 bg-[#FFB347]/40 -skew-x-12" />
                </div>
                <div class="flex gap-3">
                    <ArrowButton
                        kind=IconKind::ChevronLeft
                        label="Previous image"
                        on_press=Callback::new(move |_| step(Direction::Previous))
                    />
                    <ArrowButton
                        kind=IconKind::ChevronRight
                        label="Next image"
                        on_press=Callback::new(move |_| step(Direction::Next))
                    />
                </div>
            </div>

            <div
                node_ref=strip_ref
                class="relative flex gap-6 overflow-x-auto px-4 md:px-8 py-10 snap-x snap-mandatory no-scrollbar scroll-smooth"
                on:scroll=move |_| refresh_active()
            >
                {cards}
            </div>
        </div>
    }
}

#[component]
fn ArrowButton(kind: IconKind, label: &'static str, on_press: Callback<()>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_press.call(())
            class="w-12 h-12 rounded-full border-2 border-[#1F2937] dark:border-white flex items-center justify-center text-[#1F2937] dark:text-white hover:bg-[#1F2937] hover:text-white transition-all duration-300 active:scale-95 shadow-md hover:shadow-lg"
            aria-label=label
        >
            <Icon kind=kind size=24 />
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class_highlights_active() {
        assert!(card_class(true).contains("ring-[#FFB347]"));
        assert!(!card_class(false).contains("ring-[#FFB347]"));
        assert!(card_class(false).contains("scale-90"));
    }

    #[test]
    fn test_caption_hidden_until_active() {
        assert!(caption_class(true).starts_with("translate-y-0"));
        assert!(caption_class(false).contains("opacity-0"));
    }
}
