//! Team Page
//!
//! Faculty coordinators, the executive committee and one collapsible panel
//! per technical domain. The first domain starts expanded.

use cs_branch::catalog::data::TEAM_DOMAINS;
use cs_branch::catalog::{Catalog, TeamMember};
use cs_branch::filter::{DomainAccordion, DomainGroup, TeamRoster};
use leptos::*;

use crate::components::{Icon, IconKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PortraitSize {
    Large,
    Small,
}

impl PortraitSize {
    fn aspect(self) -> &'static str {
        match self {
            PortraitSize::Large => "aspect-[3/4]",
            PortraitSize::Small => "aspect-[4/5]",
        }
    }
}

fn mailto(email: Option<&str>) -> String {
    format!("mailto:{}", email.unwrap_or("#"))
}

fn panel_header_class(open: bool) -> &'static str {
    if open {
        "w-full flex items-center justify-between p-4 md:p-6 transition-colors bg-[#1F2937] text-white"
    } else {
        "w-full flex items-center justify-between p-4 md:p-6 transition-colors bg-white dark:bg-gray-900 text-black dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800"
    }
}

#[component]
pub fn Team() -> impl IntoView {
    let roster = TeamRoster::build(Catalog::builtin().team, TEAM_DOMAINS);
    let accordion = create_rw_signal(
        TEAM_DOMAINS
            .first()
            .map(|&d| DomainAccordion::opened(d))
            .unwrap_or_default(),
    );

    view! {
        <div class="pt-24 pb-20 min-h-screen bg-white dark:bg-[#0D0D0D]">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center mb-12 md:mb-16">
                    <h1 class="text-3xl md:text-4xl font-black mb-4 text-black dark:text-white uppercase tracking-tight">
                        "Meet the Minds Behind the Magic"
                    </h1>
                    <p class="text-gray-500 max-w-2xl mx-auto text-sm md:text-base px-4">
                        "A diverse team of creators, coders, designers, and innovators working together to bring ideas to life"
                    </p>
                </div>

                <div class="mb-16 md:mb-20 text-center">
                    <h2 class="text-lg md:text-xl font-bold mb-8 md:mb-10 text-[#FFB347] uppercase border-b-2 border-[#FFB347] inline-block pb-2">
                        "Faculty Coordinators"
                    </h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6 md:gap-8 justify-items-center">
                        {roster
                            .faculty
                            .iter()
                            .map(|&m| {
                                view! {
                                    <div class="w-full max-w-[280px]">
                                        <PortraitCard member=m size=PortraitSize::Large />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mb-16 md:mb-20 text-center">
                    <h2 class="text-lg md:text-xl font-bold mb-8 md:mb-10 text-black dark:text-white uppercase border-b-2 border-black dark:border-white inline-block pb-2">
                        "Executive Committee"
                    </h2>
                    <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4 md:gap-8 justify-items-center">
                        {roster
                            .executive
                            .iter()
                            .map(|&m| {
                                view! {
                                    <div class="w-full max-w-[240px]">
                                        <PortraitCard member=m size=PortraitSize::Small />
                                        <p class="text-center text-[10px] md:text-xs font-bold mt-3 text-gray-400 uppercase tracking-widest">
                                            {m.role}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="max-w-4xl mx-auto mb-16 space-y-4">
                    {roster
                        .domains
                        .into_iter()
                        .map(|group| view! { <DomainPanel group=group accordion=accordion /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn DomainPanel(
    group: DomainGroup<'static>,
    accordion: RwSignal<DomainAccordion<'static>>,
) -> impl IntoView {
    let name = group.name;
    let members = group.leads_first();
    let is_open = move || accordion.with(|a| a.is_open(name));

    view! {
        <div class="border border-gray-200 dark:border-gray-700 rounded-2xl overflow-hidden shadow-sm">
            <button
                on:click=move |_| accordion.update(|a| a.toggle(name))
                class=move || panel_header_class(is_open())
            >
                <span class="font-bold text-base md:text-lg uppercase tracking-wide text-left">
                    {format!("{} Team", name)}
                </span>
                <span class=move || {
                    if is_open() {
                        "shrink-0 text-[#FFB347] rotate-180 transition-transform"
                    } else {
                        "shrink-0 transition-transform"
                    }
                }>
                    <Icon kind=IconKind::ChevronDown />
                </span>
            </button>
            <Show when=is_open>
                <div class="p-6 md:p-8 bg-gray-50 dark:bg-gray-800 fade-in">
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-4 md:gap-6 justify-items-center">
                        {if members.is_empty() {
                            view! {
                                <p class="text-gray-500 italic col-span-full">"Members joining soon..."</p>
                            }
                            .into_view()
                        } else {
                            members
                                .iter()
                                .map(|&m| {
                                    view! {
                                        <div class="w-full max-w-[200px]">
                                            <PortraitCard member=m size=PortraitSize::Small />
                                            <Show when=move || m.is_lead>
                                                <p class="text-center text-[10px] font-bold mt-2 text-[#FFB347] uppercase tracking-widest">
                                                    "Team Lead"
                                                </p>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn PortraitCard(member: &'static TeamMember, size: PortraitSize) -> impl IntoView {
    view! {
        <div class="relative group overflow-hidden rounded-[20px] shadow-lg bg-white transform transition-transform duration-300 hover:scale-[1.02] w-full h-full will-change-transform">
            <div class=format!("w-full {} overflow-hidden relative", size.aspect())>
                <img
                    src=member.image
                    alt=member.name
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    loading="lazy"
                    decoding="async"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-black/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none" />
            </div>
            <div class="absolute bottom-4 left-4 right-4 bg-white/95 backdrop-blur-md p-3 md:p-4 rounded-xl shadow-lg text-center transition-all duration-300 group-hover:-translate-y-1 z-10">
                <h3 class="font-bold text-gray-900 text-sm truncate">{member.name}</h3>
                <p class="text-[10px] md:text-xs text-gray-500 font-medium uppercase tracking-wider truncate">
                    {member.role}
                </p>
                <div class="grid grid-rows-[0fr] group-hover:grid-rows-[1fr] transition-[grid-template-rows] duration-300 ease-out">
                    <div class="overflow-hidden">
                        <div class="pt-3 mt-2 border-t border-gray-100 flex flex-col items-center gap-2 opacity-0 group-hover:opacity-100 transition-opacity duration-300 delay-75">
                            {member.domain.map(|domain| {
                                view! {
                                    <span class="px-2 py-0.5 bg-gray-100 text-gray-600 rounded text-[10px] font-bold uppercase tracking-wider border border-gray-200">
                                        {domain}
                                    </span>
                                }
                            })}
                            <div class="flex justify-center gap-4 mt-1">
                                <a
                                    href=member.linkedin.unwrap_or("#")
                                    class="text-gray-500 hover:text-[#0077b5] transition-all duration-200 hover:scale-125 transform p-1.5 hover:bg-blue-50 rounded-full"
                                    aria-label="LinkedIn Profile"
                                >
                                    <Icon kind=IconKind::Linkedin size=18 />
                                </a>
                                <a
                                    href=mailto(member.email)
                                    class="text-gray-500 hover:text-[#EA4335] transition-all duration-200 hover:scale-125 transform p-1.5 hover:bg-red-50 rounded-full"
                                    aria-label="Email Contact"
                                >
                                    <Icon kind=IconKind::Mail size=18 />
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto() {
        assert_eq!(mailto(Some("chair@branch.example")), "mailto:chair@branch.example");
        assert_eq!(mailto(None), "mailto:#");
    }

    #[test]
    fn test_panel_header_class() {
        assert!(panel_header_class(true).contains("bg-[#1F2937]"));
        assert!(!panel_header_class(false).contains("bg-[#1F2937]"));
    }
}
