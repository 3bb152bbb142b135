//! Navigation Component
//!
//! Fixed header with the branch logo, page links, theme toggle and the WIE
//! link. Transparent over the hero of the dark landing pages until the
//! window scrolls.

use cs_branch::animation::HeaderScroll;
use cs_branch::catalog::data::LOGO_FULL;
use cs_branch::routes::{header_is_transparent, Page};
use leptos::*;
use leptos_router::*;

use crate::components::{Icon, IconKind};
use crate::dom;
use crate::state::ThemeState;

const HEADER_BASE: &str =
    "fixed top-0 left-0 w-full z-50 transition-all duration-300 flex items-center px-4 md:px-8 lg:px-12 gap-4";
const HEADER_SOLID: &str = "h-20 bg-[#0E0E0E]/95 backdrop-blur-md border-b border-white/10 shadow-lg";
const HEADER_CLEAR: &str =
    "h-24 bg-[#0E0E0E] md:bg-transparent border-b border-white/5 md:border-transparent";

fn header_class(transparent: bool) -> String {
    let style = if transparent { HEADER_CLEAR } else { HEADER_SOLID };
    format!("{} {}", HEADER_BASE, style)
}

fn link_class(active: bool) -> &'static str {
    if active {
        "text-sm font-semibold transition-all duration-300 relative py-1 whitespace-nowrap text-[#FFB347]"
    } else {
        "text-sm font-semibold transition-all duration-300 relative py-1 whitespace-nowrap text-gray-300 hover:text-white"
    }
}

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_context::<ThemeState>().expect("ThemeState not found");
    let location = use_location();

    let (scroll, set_scroll) = create_signal(HeaderScroll::from_scroll_y(dom::scroll_y()));
    let listener = window_event_listener(ev::scroll, move |_| {
        let mut next = scroll.get_untracked();
        if next.update(dom::scroll_y()) {
            set_scroll.set(next);
        }
    });
    on_cleanup(move || listener.remove());

    let transparent = move || {
        location
            .pathname
            .with(|path| header_is_transparent(path, scroll.get().is_scrolled()))
    };

    view! {
        <nav class=move || header_class(transparent())>
            // Logo and branch name
            <A href="/" class="flex items-center gap-3 group select-none shrink-0">
                <div class="bg-white px-2 py-1 md:px-3 md:py-1.5 rounded-lg shadow-md flex items-center justify-center shrink-0 transition-transform duration-300 group-hover:scale-105">
                    <img src=LOGO_FULL alt="IEEE CS" class="h-8 md:h-9 w-auto object-contain" />
                </div>
                <div class="hidden lg:flex flex-col justify-center border-l border-white/10 pl-3 h-8">
                    <span class="text-white font-bold text-sm leading-none group-hover:text-[#FFB347] transition-colors tracking-wide">
                        "Student Branch"
                    </span>
                    <span class="text-gray-400 text-[10px] font-medium tracking-[0.2em] uppercase group-hover:text-white transition-colors">
                        "KARE"
                    </span>
                </div>
            </A>

            // Page links, scrollable on narrow screens
            <div class="flex-1 flex items-center justify-start md:justify-center overflow-x-auto gap-6 md:gap-8 px-2 no-scrollbar">
                {Page::NAV
                    .iter()
                    .map(|page| view! { <NavLink page=*page /> })
                    .collect_view()}
            </div>

            <div class="flex items-center gap-3 shrink-0">
                <button
                    on:click=move |_| theme.toggle()
                    class="text-gray-400 hover:text-white transition-colors p-2 hover:bg-white/5 rounded-full"
                    aria-label="Toggle Theme"
                >
                    {move || {
                        if theme.is_dark() {
                            view! { <Icon kind=IconKind::Sun /> }.into_view()
                        } else {
                            view! { <Icon kind=IconKind::Moon /> }.into_view()
                        }
                    }}
                </button>
                <a
                    href="#"
                    class="hidden sm:flex px-4 md:px-6 py-2 md:py-2.5 rounded-full bg-[#050505] border border-gray-800 hover:border-[#E6007E] hover:bg-[#E6007E]/5 transition-all shadow-md items-center justify-center group whitespace-nowrap"
                >
                    <span class="text-[#E6007E] font-serif font-bold text-xs md:text-sm tracking-[0.15em] group-hover:text-[#ff7cbd] transition-colors">
                        "WIE KARE"
                    </span>
                </a>
            </div>
        </nav>
    }
}

/// Individual navigation link, highlighted on an exact path match
#[component]
fn NavLink(page: Page) -> impl IntoView {
    let location = use_location();
    let active = move || location.pathname.with(|path| Page::from_path(path) == Some(page));

    view! {
        <A href=page.path() class=move || link_class(active())>
            {page.nav_label()}
            <Show when=active>
                <span class="absolute -bottom-1.5 left-0 w-full h-[3px] bg-[#FFB347] rounded-full shadow-[0_0_8px_#FFB347]" />
            </Show>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_class() {
        assert!(header_class(true).contains("md:bg-transparent"));
        assert!(header_class(false).contains("backdrop-blur-md"));
        assert!(header_class(false).starts_with("fixed top-0"));
    }

    #[test]
    fn test_link_class() {
        assert!(link_class(true).contains("text-[#FFB347]"));
        assert!(!link_class(false).contains("text-[#FFB347]"));
    }
}
