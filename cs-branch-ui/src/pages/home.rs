//! Home Page
//!
//! Hero with the typewriter headline, the next few events and the
//! achievement spotlight.

use cs_branch::animation::stagger_delay_ms;
use cs_branch::catalog::data::{ABOUT_SLIDESHOW, HERO_WORDS};
use cs_branch::catalog::{Achievement, Catalog, Event};
use leptos::*;
use leptos_router::*;

use crate::components::{Icon, IconKind, RevealOnScroll, TypewriterText};

const FEATURED_EVENTS: usize = 3;
const SPOTLIGHT_ACHIEVEMENTS: usize = 4;
const CARD_STAGGER_MS: u32 = 150;

#[component]
pub fn Home() -> impl IntoView {
    let catalog = Catalog::builtin();
    let events = catalog.upcoming_events(FEATURED_EVENTS);
    let achievements = &catalog.achievements[..SPOTLIGHT_ACHIEVEMENTS.min(catalog.achievements.len())];

    view! {
        <div class="w-full overflow-hidden">
            <Hero />

            // Featured events
            <section class="py-16 md:py-24 relative bg-[#FAFAFA] dark:bg-[#111827]">
                <div class="max-w-7xl mx-auto px-4">
                    <RevealOnScroll>
                        <div class="flex justify-between items-end mb-12 md:mb-16">
                            <div>
                                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-2">
                                    "Upcoming Events"
                                </h2>
                                <div class="h-1.5 w-24 bg-[#FFB347] rounded-full mt-4" />
                            </div>
                            <A
                                href="/events"
                                class="w-10 h-10 md:w-12 md:h-12 rounded-full flex items-center justify-center bg-gray-200 dark:bg-gray-700 text-gray-700 dark:text-white hover:bg-[#FFB347] hover:text-black transition-colors hover:rotate-45 duration-300"
                            >
                                <Icon kind=IconKind::ChevronRight />
                            </A>
                        </div>
                    </RevealOnScroll>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 md:gap-12">
                        {events
                            .into_iter()
                            .enumerate()
                            .map(|(i, event)| {
                                view! {
                                    <RevealOnScroll delay=stagger_delay_ms(i, CARD_STAGGER_MS) class="h-full">
                                        <FeaturedEventCard event=event />
                                    </RevealOnScroll>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Achievement spotlight
            <section class="py-16 md:py-24 relative bg-white dark:bg-[#0D0D0D]">
                <div class="max-w-7xl mx-auto px-4">
                    <RevealOnScroll>
                        <div class="bg-[#1F2937] rounded-[24px] md:rounded-[40px] p-8 md:p-12 lg:p-20 relative overflow-hidden shadow-2xl border border-gray-700">
                            <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 lg:gap-16 items-center relative z-10">
                                <div>
                                    <h2 class="text-3xl md:text-5xl font-black mb-6 text-white leading-tight">
                                        "Hall of " <span class="text-[#FFB347]">"Fame"</span>
                                    </h2>
                                    <p class="text-base md:text-lg text-gray-300 mb-8 leading-relaxed font-light">
                                        "Our student branch has consistently been recognized for its outstanding contributions. From winning international hackathons to receiving the Best Student Branch award."
                                    </p>
                                    <A
                                        href="/achievements"
                                        class="px-6 md:px-8 py-3 md:py-4 rounded-full bg-[#FFB347] text-black font-bold text-sm tracking-widest uppercase inline-flex items-center gap-3 hover:bg-white hover:scale-105 transition-all shadow-[0_0_20px_rgba(255,179,71,0.4)]"
                                    >
                                        "View All Achievements"
                                        <Icon kind=IconKind::ArrowRight />
                                    </A>
                                </div>
                                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 md:gap-6">
                                    {achievements
                                        .iter()
                                        .map(|a| view! { <SpotlightCard achievement=a /> })
                                        .collect_view()}
                                </div>
                            </div>
                            <div class="absolute top-0 right-0 w-[500px] h-[500px] bg-[#FFB347] opacity-5 rounded-full filter blur-[100px] pointer-events-none translate-x-1/3 -translate-y-1/3" />
                            <div class="absolute bottom-0 left-0 w-[400px] h-[400px] bg-[#003057] opacity-20 rounded-full filter blur-[80px] pointer-events-none -translate-x-1/3 translate-y-1/3" />
                        </div>
                    </RevealOnScroll>
                </div>
            </section>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let background = ABOUT_SLIDESHOW.first().copied().unwrap_or_default();

    view! {
        <section class="relative min-h-screen flex items-center overflow-hidden pt-16 md:pt-0">
            <div
                class="absolute inset-0 z-0 bg-cover bg-center bg-no-repeat fade-in"
                style=format!("background-image: url('{}')", background)
            >
                <div class="absolute inset-0 bg-gradient-to-r from-black/95 via-black/80 to-black/40" />
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 w-full pt-12 md:pt-20">
                <div class="max-w-4xl">
                    <div class="inline-block px-4 py-1.5 rounded-full border border-[#FFB347]/30 bg-[#FFB347]/10 text-[#FFB347] font-medium text-xs sm:text-sm mb-6">
                        "✨ Empowering Student Innovators"
                    </div>
                    <h1 class="text-4xl sm:text-5xl md:text-7xl font-extrabold tracking-tight text-white mb-6 leading-tight">
                        "We Are " <br />
                        <TypewriterText words=HERO_WORDS />
                    </h1>
                    <p class="text-base sm:text-lg md:text-xl text-gray-300 mb-8 md:mb-10 max-w-2xl leading-relaxed font-light border-l-4 border-[#FFB347] pl-4 sm:pl-6 bg-gradient-to-r from-white/5 to-transparent p-4 rounded-r-xl">
                        "IEEE Computer Society Student Branch " <br />
                        <span class="text-white font-medium">
                            "Kalasalingam Academy of Research and Education"
                        </span>
                    </p>
                    <div class="flex flex-wrap gap-4 mb-12 md:mb-16">
                        <A
                            href="/events"
                            class="px-6 sm:px-8 py-3 sm:py-4 rounded-full bg-[#FFB347] text-black font-bold text-xs sm:text-sm tracking-wider uppercase hover:bg-[#ffaa33] transition-all hover:scale-105 shadow-[0_0_20px_rgba(255,179,71,0.4)]"
                        >
                            "Explore Events"
                        </A>
                        <A
                            href="/contact"
                            class="px-6 sm:px-8 py-3 sm:py-4 rounded-full bg-transparent border-2 border-white text-white font-bold text-xs sm:text-sm tracking-wider uppercase hover:bg-white hover:text-black transition-all hover:scale-105 backdrop-blur-sm"
                        >
                            "Join Community"
                        </A>
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 md:gap-12 border-t border-white/10 pt-8">
                        <HeroMetric icon=IconKind::Users value="500+" label="Active Members" float="animate-float" />
                        <HeroMetric icon=IconKind::Award value="IEEE" label="Student Branch" float="animate-float-delayed" />
                        <HeroMetric icon=IconKind::Calendar value="50+" label="Events Annually" float="animate-float" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroMetric(
    icon: IconKind,
    value: &'static str,
    label: &'static str,
    float: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex items-center gap-4 {}", float)>
            <div class="w-10 h-10 sm:w-12 sm:h-12 rounded-full bg-white/5 flex items-center justify-center text-[#FFB347] border border-white/10 backdrop-blur-md shrink-0">
                <Icon kind=icon />
            </div>
            <div>
                <div class="text-xl sm:text-2xl font-bold text-white">{value}</div>
                <div class="text-[10px] sm:text-xs text-gray-400 uppercase tracking-widest">{label}</div>
            </div>
        </div>
    }
}

#[component]
fn FeaturedEventCard(event: &'static Event) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-[24px] shadow-lg hover:shadow-2xl transition-all duration-300 group overflow-hidden border border-gray-100 dark:border-gray-700 hover:-translate-y-2 will-change-transform h-full flex flex-col">
            <div class="relative h-48 md:h-56 overflow-hidden">
                <img
                    src=event.image
                    alt=event.title
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                    loading="lazy"
                    decoding="async"
                />
                <div class="absolute top-4 right-4">
                    <span class="px-3 py-1 rounded-full text-[10px] font-bold uppercase tracking-wide text-white bg-black/50 backdrop-blur-md border border-white/20">
                        {event.status.label()}
                    </span>
                </div>
            </div>
            <div class="p-6 flex-1 flex flex-col">
                <div class="text-xs font-bold text-[#FFB347] uppercase tracking-wider mb-2">
                    {event.category.label()}
                </div>
                <h3 class="text-lg md:text-xl font-bold text-gray-900 dark:text-white mb-3 line-clamp-2 group-hover:text-[#FFB347] transition-colors">
                    {event.title}
                </h3>
                <div class="flex items-center text-gray-500 dark:text-gray-400 text-sm mb-6 gap-2">
                    <Icon kind=IconKind::Calendar size=14 class="text-[#FFB347]" />
                    {event.date}
                </div>
                <A
                    href="/events"
                    class="mt-auto block w-full text-center py-3 rounded-xl bg-gray-50 dark:bg-gray-700 text-gray-900 dark:text-white text-sm font-bold uppercase tracking-wider hover:bg-[#FFB347] hover:text-black transition-colors group-hover:shadow-md"
                >
                    "View Details"
                </A>
            </div>
        </div>
    }
}

#[component]
fn SpotlightCard(achievement: &'static Achievement) -> impl IntoView {
    view! {
        <div class="bg-[#FAFAFA] p-6 rounded-2xl flex flex-col items-center text-center shadow-lg hover:shadow-2xl transition-all duration-300 hover:-translate-y-2 hover:bg-white group relative overflow-hidden">
            <div class="absolute top-0 right-0 w-12 h-12 bg-[#FFB347]/10 rounded-bl-full -mr-2 -mt-2 transition-all group-hover:bg-[#FFB347] group-hover:scale-150" />
            <div class="text-3xl md:text-4xl mb-4 transform group-hover:scale-110 transition-transform relative z-10">
                "🏆"
            </div>
            <div class="font-bold text-sm md:text-base mb-2 text-[#1F2937] line-clamp-2 leading-tight relative z-10 group-hover:text-black">
                {achievement.title}
            </div>
            <div class="px-2 py-1 bg-gray-100 rounded text-[10px] font-bold uppercase text-gray-500 tracking-wider group-hover:bg-[#1F2937] group-hover:text-white transition-colors relative z-10">
                {achievement.level.label()}
            </div>
        </div>
    }
}
