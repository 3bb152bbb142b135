//! Gallery Page
//!
//! One carousel per photo collection, narrowed by a category filter, plus a
//! lightbox for the clicked photo.

use cs_branch::catalog::{Catalog, GalleryCollection, GalleryItem};
use cs_branch::filter::{gallery_sections, GalleryFilter};
use leptos::*;

use crate::components::{GalleryCarousel, Icon, IconKind};

fn filter_button_class(active: bool) -> &'static str {
    if active {
        "px-6 py-3 rounded-full text-sm font-bold uppercase tracking-wider transition-all duration-300 transform bg-[#FFB347] text-[#1F2937] shadow-[0_10px_25px_-5px_rgba(255,179,71,0.5)] scale-110 -translate-y-1"
    } else {
        "px-6 py-3 rounded-full text-sm font-bold uppercase tracking-wider transition-all duration-300 transform bg-white dark:bg-gray-900 text-gray-500 border border-gray-200 dark:border-gray-700 hover:border-[#FFB347] hover:text-[#FFB347] hover:shadow-md"
    }
}

#[component]
pub fn Gallery() -> impl IntoView {
    let catalog = Catalog::builtin();
    let filter = create_rw_signal(GalleryFilter::All);
    let lightbox = create_rw_signal(None::<&'static GalleryItem>);

    let sections = create_memo(move |_| {
        let collections = GalleryCollection::ALL.iter().map(|&c| (c, catalog.gallery(c)));
        gallery_sections(collections, filter.get())
    });
    let on_select = Callback::new(move |item: &'static GalleryItem| lightbox.set(Some(item)));

    view! {
        <div class="min-h-screen bg-white dark:bg-[#0D0D0D] font-sans pt-32 pb-20 overflow-x-hidden selection:bg-[#FFB347] selection:text-[#1F2937]">
            <div class="max-w-7xl mx-auto px-4 text-center mb-16">
                <h1 class="text-4xl md:text-6xl font-black text-[#1F2937] dark:text-white mb-6 uppercase tracking-tight">
                    "Our "
                    <span class="text-[#FFB347] underline decoration-4 underline-offset-4 decoration-[#1F2937] dark:decoration-white">
                        "Gallery"
                    </span>
                </h1>
                <p class="text-gray-500 max-w-2xl mx-auto text-lg">
                    "Capturing moments of innovation, collaboration, and success across our journey."
                </p>
            </div>

            <div class="max-w-7xl mx-auto px-4 mb-20">
                <div class="flex flex-wrap justify-center gap-3 md:gap-4">
                    {GalleryFilter::ALL
                        .iter()
                        .map(|&f| {
                            view! {
                                <button
                                    on:click=move |_| filter.set(f)
                                    class=move || filter_button_class(filter.get() == f)
                                >
                                    {f.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="max-w-7xl mx-auto space-y-12">
                {move || {
                    sections
                        .get()
                        .into_iter()
                        .map(|section| {
                            view! {
                                <div class="fade-in">
                                    <GalleryCarousel
                                        collection=section.collection
                                        items=section.items
                                        on_select=on_select
                                    />
                                </div>
                            }
                        })
                        .collect_view()
                }}

                <Show when=move || sections.with(|s| s.is_empty())>
                    <div class="text-center py-20">
                        <p class="text-gray-400 text-xl font-medium">"No images found for this category."</p>
                        <button
                            on:click=move |_| filter.set(GalleryFilter::All)
                            class="text-[#FFB347] font-bold mt-4 hover:underline"
                        >
                            "View All Photos"
                        </button>
                    </div>
                </Show>
            </div>

            {move || {
                lightbox
                    .get()
                    .map(|item| {
                        view! { <Lightbox item=item on_close=Callback::new(move |_| lightbox.set(None)) /> }
                    })
            }}
        </div>
    }
}

#[component]
fn Lightbox(item: &'static GalleryItem, on_close: Callback<()>) -> impl IntoView {
    let listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.call(());
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <div
            class="fixed inset-0 z-[100] bg-[#1F2937]/95 backdrop-blur-md flex items-center justify-center p-4 fade-in"
            on:click=move |_| on_close.call(())
        >
            <button
                class="absolute top-6 right-6 text-white/70 hover:text-white hover:rotate-90 transition-all duration-300 p-2 bg-white/10 rounded-full z-50"
                aria-label="Close"
            >
                <Icon kind=IconKind::Close size=32 />
            </button>
            <div
                class="relative max-w-7xl max-h-[90vh] flex flex-col items-center"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="relative rounded-lg overflow-hidden shadow-2xl ring-1 ring-white/10">
                    <img src=item.src alt=item.caption class="max-w-full max-h-[80vh] object-contain" />
                </div>
                <div class="mt-6 text-center">
                    <h3 class="text-white text-2xl font-bold tracking-wide mb-2">{item.caption}</h3>
                    <div class="h-1 w-20 bg-[#FFB347] mx-auto rounded-full" />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_button_class() {
        assert!(filter_button_class(true).contains("bg-[#FFB347]"));
        assert!(filter_button_class(false).contains("border-gray-200"));
    }
}
