//! Events Page
//!
//! Sidebar filters (search, type, domain, status), a status tab strip and
//! the filtered event grid. Every control edits one [`EventFilter`] signal;
//! the grid is a memo over it.

use cs_branch::catalog::{Catalog, Event, EventCategory, EventDomain, EventStatus};
use cs_branch::filter::{EventFilter, EventTab};
use leptos::*;

use crate::components::{CloseButton, Icon, IconKind, Modal, StatusBadge};

/// Tab strip order
const TABS: &[EventTab] = &[
    EventTab::All,
    EventTab::Ongoing,
    EventTab::Upcoming,
    EventTab::Completed,
];

fn tab_class(active: bool) -> &'static str {
    if active {
        "px-3 md:px-4 py-2 text-sm font-bold transition-all duration-300 relative whitespace-nowrap text-[#003057] dark:text-[#FFB347]"
    } else {
        "px-3 md:px-4 py-2 text-sm font-bold transition-all duration-300 relative whitespace-nowrap text-gray-400 hover:text-gray-600"
    }
}

fn sidebar_class(mobile_open: bool) -> &'static str {
    if mobile_open {
        "md:w-72 flex-shrink-0 fixed inset-0 z-[60] bg-white dark:bg-[#111827] p-6 overflow-y-auto"
    } else {
        "md:w-72 flex-shrink-0 hidden md:block"
    }
}

fn detail_button_label(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Completed => "View Recap",
        _ => "View Details",
    }
}

fn primary_action_label(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Open => "Register Now",
        _ => "Event Page",
    }
}

/// Generated initials avatar for a guest speaker
fn speaker_avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        name.trim().replace(' ', "+")
    )
}

#[component]
pub fn Events() -> impl IntoView {
    let catalog = Catalog::builtin();
    let filter = create_rw_signal(EventFilter::default());
    let show_filters = create_rw_signal(false);
    let selected = create_rw_signal(None::<&'static str>);

    let visible = create_memo(move |_| filter.with(|f| f.apply(catalog.events)));

    let clear_sidebar = move |_| {
        filter.update(|f| f.clear_selections());
        show_filters.set(false);
    };

    view! {
        <div class="pt-24 pb-20 min-h-screen bg-[#FAFAFA] dark:bg-[#0D0D0D]">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row gap-8">
                    // Sidebar
                    <aside class=move || sidebar_class(show_filters.get())>
                        <div class="space-y-8 sticky top-28">
                            <div class="flex justify-between items-center md:hidden mb-4">
                                <h2 class="text-xl font-bold text-gray-900 dark:text-white">"Filters"</h2>
                                <button
                                    on:click=move |_| show_filters.set(false)
                                    class="p-2 bg-gray-100 dark:bg-gray-800 rounded-full"
                                >
                                    <Icon kind=IconKind::Close size=24 />
                                </button>
                            </div>

                            <div class="relative">
                                <Icon
                                    kind=IconKind::Search
                                    size=16
                                    class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400"
                                />
                                <input
                                    type="text"
                                    placeholder="Search events..."
                                    prop:value=move || filter.with(|f| f.search.clone())
                                    on:input=move |ev| filter.update(|f| f.set_search(event_target_value(&ev)))
                                    class="w-full pl-10 pr-4 py-3 rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 text-sm focus:outline-none focus:border-[#FFB347] focus:ring-2 focus:ring-[#FFB347]/20 transition-all"
                                />
                            </div>

                            <FilterGroup title="Event Type">
                                {EventCategory::FILTER_OPTIONS
                                    .iter()
                                    .map(|&category| {
                                        check_option(
                                            category.label().to_string(),
                                            move || filter.with(|f| f.categories.contains(&category)),
                                            move || filter.update(|f| f.toggle_category(category)),
                                        )
                                    })
                                    .collect_view()}
                            </FilterGroup>

                            <FilterGroup title="Domain">
                                {EventDomain::FILTER_OPTIONS
                                    .iter()
                                    .map(|&domain| {
                                        check_option(
                                            domain.label().to_string(),
                                            move || filter.with(|f| f.domains.contains(&domain)),
                                            move || filter.update(|f| f.toggle_domain(domain)),
                                        )
                                    })
                                    .collect_view()}
                            </FilterGroup>

                            <FilterGroup title="Status">
                                {EventStatus::ALL
                                    .iter()
                                    .map(|&status| {
                                        check_option(
                                            status.label().to_lowercase(),
                                            move || filter.with(|f| f.statuses.contains(&status)),
                                            move || filter.update(|f| f.toggle_status(status)),
                                        )
                                    })
                                    .collect_view()}
                            </FilterGroup>

                            <button
                                on:click=clear_sidebar
                                disabled=move || !filter.with(EventFilter::has_selections)
                                class="w-full py-3 text-sm text-white bg-red-500 rounded-xl font-bold hover:bg-red-600 transition-colors shadow-md disabled:opacity-50 disabled:cursor-not-allowed disabled:hover:bg-red-500"
                            >
                                "Clear All Filters"
                            </button>
                        </div>
                    </aside>

                    // Main content
                    <div class="flex-1 min-w-0">
                        <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center mb-8 gap-4">
                            <h1 class="text-2xl md:text-3xl font-bold text-gray-900 dark:text-white leading-tight">
                                "What's Happening at " <br />
                                <span class="text-[#FFB347]">"IEEE CS KARE"</span>
                            </h1>
                            <button
                                on:click=move |_| show_filters.set(true)
                                class="md:hidden flex items-center gap-2 px-4 py-2 bg-[#1F2937] text-white rounded-lg text-sm font-bold shadow-md active:scale-95 transition-transform"
                            >
                                <Icon kind=IconKind::Filter size=18 />
                                "Filters"
                            </button>
                        </div>

                        <div class="flex justify-start space-x-2 md:space-x-4 mb-8 w-full border-b border-gray-200 dark:border-gray-700 pb-1 overflow-x-auto no-scrollbar">
                            {TABS
                                .iter()
                                .map(|&tab| {
                                    let active = move || filter.with(|f| f.tab == tab);
                                    view! {
                                        <button
                                            on:click=move |_| filter.update(|f| f.set_tab(tab))
                                            class=move || tab_class(active())
                                        >
                                            {tab.label()}
                                            <Show when=active>
                                                <div class="absolute bottom-[-5px] left-0 right-0 h-1 bg-[#003057] dark:bg-[#FFB347] rounded-t-full" />
                                            </Show>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 md:gap-8">
                            <For
                                each=move || visible.get()
                                key=|event| event.id
                                children=move |event| {
                                    view! {
                                        <EventCard
                                            event=event
                                            on_open=Callback::new(move |_| selected.set(Some(event.id)))
                                        />
                                    }
                                }
                            />
                        </div>

                        <Show when=move || visible.with(|v| v.is_empty())>
                            <div class="text-center py-20 bg-white dark:bg-gray-800 rounded-2xl border border-dashed border-gray-200 dark:border-gray-700">
                                <p class="text-gray-400 font-medium">"No events found in this category."</p>
                                <button
                                    on:click=move |_| filter.update(|f| f.clear())
                                    class="mt-4 text-[#FFB347] font-bold text-sm hover:underline"
                                >
                                    "Clear all filters"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .and_then(|id| catalog.event(id))
                    .map(|event| {
                        view! {
                            <EventDetails event=event on_close=Callback::new(move |_| selected.set(None)) />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn FilterGroup(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h3 class="font-bold text-xs uppercase text-gray-500 mb-3 tracking-widest">{title}</h3>
            <div class="space-y-2">{children()}</div>
        </div>
    }
}

fn check_option(
    label: String,
    checked: impl Fn() -> bool + 'static,
    on_toggle: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <label class="flex items-center space-x-3 cursor-pointer group">
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |_| on_toggle()
                class="h-4 w-4 rounded border-gray-300 text-[#FFB347] focus:ring-[#FFB347]"
            />
            <span class="text-sm text-gray-700 dark:text-gray-300 capitalize group-hover:text-[#FFB347] transition-colors">
                {label}
            </span>
        </label>
    }
}

#[component]
fn EventCard(event: &'static Event, on_open: Callback<()>) -> impl IntoView {
    view! {
        <article class="group bg-white dark:bg-gray-800 rounded-2xl border border-gray-100 dark:border-gray-700 shadow-sm hover:shadow-xl hover:-translate-y-1 transition-all duration-300 overflow-hidden flex flex-col will-change-transform h-full">
            <div class="relative h-48 sm:h-56 bg-gray-200 overflow-hidden shrink-0">
                <img
                    src=event.image
                    alt=event.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    loading="lazy"
                    decoding="async"
                />
                <div class="absolute top-3 right-3">
                    <StatusBadge status=event.status />
                </div>
            </div>
            <div class="p-5 md:p-6 flex-1 flex flex-col">
                <div class="flex items-center gap-2 mb-2 flex-wrap">
                    <span class="text-[10px] font-bold uppercase tracking-widest text-[#FFB347] bg-yellow-50 px-2 py-0.5 rounded border border-yellow-100">
                        {event.category.label()}
                    </span>
                    <span class="text-[10px] text-gray-300 hidden sm:inline">"•"</span>
                    <span class="text-[10px] font-bold uppercase tracking-widest text-gray-400 bg-gray-50 dark:bg-gray-700 px-2 py-0.5 rounded border border-gray-100 dark:border-gray-600">
                        {event.domain.label()}
                    </span>
                </div>
                <h2 class="text-lg md:text-xl font-bold mb-3 text-gray-900 dark:text-white leading-tight group-hover:text-[#003057] dark:group-hover:text-[#FFB347] transition-colors">
                    {event.title}
                </h2>
                <p class="text-gray-500 dark:text-gray-400 text-sm mb-6 line-clamp-2">{event.description}</p>
                <div class="mt-auto space-y-2 text-sm text-gray-600 dark:text-gray-300 border-t border-gray-50 dark:border-gray-700 pt-4">
                    <div class="flex items-center gap-3">
                        <Icon kind=IconKind::Calendar size=16 class="text-[#FFB347] shrink-0" />
                        <span class="truncate">{format!("{} • {}", event.date, event.time)}</span>
                    </div>
                    <div class="flex items-center gap-3">
                        <Icon kind=IconKind::MapPin size=16 class="text-[#FFB347] shrink-0" />
                        <span class="truncate">{event.venue}</span>
                    </div>
                </div>
                <div class="mt-6 flex gap-3">
                    <button
                        on:click=move |_| on_open.call(())
                        class="flex-1 bg-[#003057] text-white py-2.5 rounded-lg text-sm font-bold hover:bg-[#FFB347] hover:text-black transition-all shadow-md hover:shadow-lg transform active:scale-[0.98] duration-200"
                    >
                        {detail_button_label(event.status)}
                    </button>
                </div>
            </div>
        </article>
    }
}

#[component]
fn EventDetails(event: &'static Event, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal on_close=on_close panel_class="max-w-2xl bg-white dark:bg-gray-900 rounded-2xl md:rounded-3xl flex flex-col">
            <div class="relative h-48 md:h-64 shrink-0">
                <img src=event.image alt=event.title class="w-full h-full object-cover" loading="eager" />
                <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/20 to-transparent" />
                <CloseButton on_close=on_close />
                <div class="absolute bottom-6 left-6 right-6">
                    <div class="flex gap-2 mb-2">
                        <StatusBadge status=event.status />
                        <span class="px-2 py-1 rounded-md bg-white/20 backdrop-blur-md text-white text-[10px] font-bold uppercase tracking-wide border border-white/10">
                            {event.category.label()}
                        </span>
                    </div>
                    <h2 class="text-2xl md:text-3xl font-bold text-white leading-tight">{event.title}</h2>
                </div>
            </div>

            <div class="p-5 md:p-8 space-y-6 md:space-y-8">
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 md:gap-6 p-4 md:p-6 bg-gray-50 dark:bg-gray-800 rounded-2xl border border-gray-100 dark:border-gray-700">
                    <InfoTile icon=IconKind::Calendar heading="Date & Time" primary=event.long_date() secondary=event.time />
                    <InfoTile icon=IconKind::MapPin heading="Location" primary=event.venue.to_string() secondary="Campus Map" />
                </div>

                <div>
                    <SectionHeading title="About the Event" />
                    <p class="text-gray-600 dark:text-gray-300 leading-relaxed text-justify whitespace-pre-line text-sm md:text-base">
                        {event.description}
                    </p>
                </div>

                {event.speaker.map(|speaker| {
                    view! {
                        <div>
                            <SectionHeading title="Guest Speaker" />
                            <div class="flex items-center gap-4">
                                <div class="w-14 h-14 md:w-16 md:h-16 rounded-full bg-gray-200 overflow-hidden shrink-0">
                                    <img
                                        src=speaker_avatar_url(speaker)
                                        alt=speaker
                                        class="w-full h-full object-cover"
                                        loading="lazy"
                                    />
                                </div>
                                <div>
                                    <h4 class="font-bold text-lg text-gray-900 dark:text-white">{speaker}</h4>
                                    <p class="text-sm text-gray-500">"Industry Expert"</p>
                                </div>
                            </div>
                        </div>
                    }
                })}

                <div class="flex gap-4 pt-4">
                    <button
                        on:click=move |_| on_close.call(())
                        class="flex-1 py-3 rounded-xl border border-gray-300 dark:border-gray-600 font-bold text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-800 transition-colors"
                    >
                        "Close"
                    </button>
                    <button class="flex-1 py-3 rounded-xl bg-[#003057] font-bold text-white hover:bg-[#FFB347] hover:text-black transition-colors shadow-lg shadow-blue-900/20">
                        {primary_action_label(event.status)}
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[component]
fn InfoTile(
    icon: IconKind,
    heading: &'static str,
    primary: String,
    secondary: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class="w-10 h-10 rounded-full bg-white dark:bg-gray-900 shadow-sm flex items-center justify-center text-[#FFB347] border border-gray-100 dark:border-gray-700 shrink-0">
                <Icon kind=icon />
            </div>
            <div>
                <p class="text-xs font-bold uppercase text-gray-400 tracking-wider mb-1">{heading}</p>
                <p class="font-semibold text-gray-900 dark:text-white">{primary}</p>
                <p class="text-sm text-gray-500">{secondary}</p>
            </div>
        </div>
    }
}

#[component]
fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <h3 class="text-lg font-bold text-gray-900 dark:text-white mb-3 flex items-center gap-2">
            {title}
            <div class="h-px flex-1 bg-gray-200 dark:bg-gray-700" />
        </h3>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_strip_covers_every_tab() {
        for tab in EventTab::ALL {
            assert!(TABS.contains(tab));
        }
        assert_eq!(TABS.len(), EventTab::ALL.len());
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(detail_button_label(EventStatus::Completed), "View Recap");
        assert_eq!(detail_button_label(EventStatus::Full), "View Details");
        assert_eq!(primary_action_label(EventStatus::Open), "Register Now");
        assert_eq!(primary_action_label(EventStatus::Closing), "Event Page");
    }

    #[test]
    fn test_speaker_avatar_url() {
        assert_eq!(
            speaker_avatar_url("Dr. Alan Turing"),
            "https://ui-avatars.com/api/?name=Dr.+Alan+Turing&background=random"
        );
    }

    #[test]
    fn test_class_helpers() {
        assert!(tab_class(true).contains("text-[#003057]"));
        assert!(sidebar_class(false).contains("hidden md:block"));
        assert!(sidebar_class(true).contains("fixed inset-0"));
    }

    #[test]
    fn test_every_card_resolves_by_id() {
        let catalog = Catalog::builtin();
        for event in catalog.events {
            assert_eq!(catalog.event(event.id).map(|e| e.title), Some(event.title));
        }
    }

    #[test]
    fn test_clear_all_enabled_only_with_selections() {
        let mut filter = EventFilter::default();
        assert!(!filter.has_selections());
        filter.toggle_status(EventStatus::Open);
        assert!(filter.has_selections());
        filter.clear_selections();
        assert!(!filter.has_selections());
    }
}
