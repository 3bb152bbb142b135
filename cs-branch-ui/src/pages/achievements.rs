//! Achievements Page
//!
//! Hall of Fame grid with a level filter; clicking a card opens its details.

use cs_branch::catalog::{Achievement, AchievementCategory, AchievementLevel, Catalog};
use cs_branch::filter::{filter_achievements, AchievementFilter, Choice};
use leptos::*;

use crate::components::{CloseButton, Icon, IconKind, Modal};

fn filter_button_class(active: bool) -> &'static str {
    if active {
        "px-6 py-3 rounded-2xl text-xs md:text-sm font-bold tracking-wide transition-all duration-300 transform active:scale-95 bg-[#1F2937] text-[#FFB347] shadow-[inset_4px_4px_8px_#151c26,inset_-4px_-4px_8px_#293648] border border-[#FFB347]/20"
    } else {
        "px-6 py-3 rounded-2xl text-xs md:text-sm font-bold tracking-wide transition-all duration-300 transform active:scale-95 bg-[#1F2937] text-gray-500 shadow-[6px_6px_12px_#151c26,-6px_-6px_12px_#293648] hover:text-gray-300 hover:-translate-y-1"
    }
}

fn category_icon(category: AchievementCategory) -> IconKind {
    match category {
        AchievementCategory::Award => IconKind::Trophy,
        AchievementCategory::Competition => IconKind::Award,
        AchievementCategory::Recognition => IconKind::Star,
    }
}

fn category_tint(category: AchievementCategory) -> &'static str {
    match category {
        AchievementCategory::Award => "text-[#FFB347]",
        _ => "text-blue-400",
    }
}

#[component]
pub fn Achievements() -> impl IntoView {
    let catalog = Catalog::builtin();
    let filter = create_rw_signal(AchievementFilter::default());
    let selected = create_rw_signal(None::<&'static str>);

    let visible = create_memo(move |_| filter_achievements(catalog.achievements, filter.get()));

    view! {
        <div class="pt-24 pb-20 min-h-screen bg-[#0D0D0D] text-white font-sans">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center mb-12 md:mb-16">
                    <h1 class="text-4xl md:text-6xl font-black mb-4 tracking-tight">
                        "Hall of " <span class="text-[#FFB347]">"Fame"</span>
                    </h1>
                    <p class="text-gray-400 text-base md:text-lg max-w-2xl mx-auto px-4">
                        "Celebrating the milestones, victories, and breakthroughs that define our journey."
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-3 md:gap-4 mb-12 md:mb-16 px-4">
                    {Choice::options(AchievementLevel::ALL)
                        .into_iter()
                        .map(|choice| {
                            view! {
                                <button
                                    on:click=move |_| filter.set(choice)
                                    class=move || filter_button_class(filter.get() == choice)
                                >
                                    {choice.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8 px-4 md:px-0">
                    <For
                        each=move || visible.get()
                        key=|a| a.id
                        children=move |achievement| {
                            view! {
                                <AchievementCard
                                    achievement=achievement
                                    on_open=Callback::new(move |_| selected.set(Some(achievement.id)))
                                />
                            }
                        }
                    />
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .and_then(|id| catalog.achievement(id))
                    .map(|achievement| {
                        view! {
                            <AchievementDetails
                                achievement=achievement
                                on_close=Callback::new(move |_| selected.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn AchievementCard(achievement: &'static Achievement, on_open: Callback<()>) -> impl IntoView {
    view! {
        <div
            on:click=move |_| on_open.call(())
            class="group relative bg-[#1F2937] rounded-[30px] p-6 md:p-8 cursor-pointer transition-all duration-300 hover:-translate-y-2 border border-white/5 shadow-[8px_8px_16px_#0b0f19,-8px_-8px_16px_#253141]"
        >
            <div class="flex justify-between items-start mb-6">
                <div class=format!(
                    "w-12 h-12 md:w-14 md:h-14 rounded-2xl flex items-center justify-center shadow-[inset_4px_4px_8px_#151c26,inset_-4px_-4px_8px_#293648] {}",
                    category_tint(achievement.category),
                )>
                    <Icon kind=category_icon(achievement.category) />
                </div>
                <span class="px-3 py-1 rounded-full bg-black/30 border border-white/10 text-[10px] font-bold uppercase tracking-widest text-gray-400 group-hover:text-white transition-colors">
                    {achievement.level.label()}
                </span>
            </div>

            <div class="space-y-3 mb-8">
                <h3 class="text-xl md:text-2xl font-bold leading-tight group-hover:text-[#FFB347] transition-colors">
                    {achievement.title}
                </h3>
                <p class="text-xs md:text-sm text-gray-400 line-clamp-2 leading-relaxed">
                    {achievement.description}
                </p>
            </div>

            <div class="flex justify-between items-center pt-6 border-t border-white/5">
                <span class="text-xs font-bold text-gray-500">{achievement.date}</span>
                <span class="flex items-center gap-2 text-xs font-bold text-[#FFB347] opacity-0 group-hover:opacity-100 transition-all transform translate-x-[-10px] group-hover:translate-x-0">
                    "Read More"
                    <Icon kind=IconKind::ArrowRight size=14 />
                </span>
            </div>

            <div class="absolute inset-0 rounded-[30px] bg-gradient-to-tr from-[#FFB347]/5 to-transparent opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none" />
        </div>
    }
}

#[component]
fn AchievementDetails(achievement: &'static Achievement, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal
            on_close=on_close
            backdrop_class="bg-black/80 backdrop-blur-sm"
            panel_class="max-w-3xl bg-[#1F2937] rounded-[32px] md:rounded-[40px] border border-white/10"
        >
            <CloseButton
                on_close=on_close
                class="absolute top-4 right-4 md:top-6 md:right-6 w-8 h-8 md:w-10 md:h-10 flex items-center justify-center rounded-full bg-black/40 text-white hover:bg-[#FFB347] hover:text-black transition-colors z-20"
            />

            <div class="h-56 md:h-80 w-full relative shrink-0">
                <img src=achievement.image alt=achievement.title class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-gradient-to-t from-[#1F2937] to-transparent" />
            </div>

            <div class="px-6 md:px-12 pb-8 md:pb-12 -mt-10 relative z-10">
                <div class="flex gap-3 mb-6 flex-wrap">
                    <span class="px-3 md:px-4 py-1.5 rounded-full bg-[#FFB347] text-black text-[10px] md:text-xs font-bold uppercase tracking-wider shadow-lg">
                        {achievement.level.label()}
                    </span>
                    <span class="px-3 md:px-4 py-1.5 rounded-full bg-black/40 border border-white/10 text-white text-[10px] md:text-xs font-bold uppercase tracking-wider">
                        {achievement.date}
                    </span>
                </div>

                <h2 class="text-2xl md:text-4xl font-bold mb-6 text-white leading-tight">
                    {achievement.title}
                </h2>

                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div class="md:col-span-2">
                        <p class="text-gray-300 leading-relaxed text-base md:text-lg">
                            {achievement.description}
                        </p>
                        <p class="text-gray-400 mt-4 leading-relaxed text-sm md:text-base">
                            "This achievement highlights our dedication to technological excellence and collaborative spirit. Our team worked tirelessly to bring this vision to life."
                        </p>
                    </div>
                    <div class="bg-black/20 rounded-2xl p-6 border border-white/5 h-fit">
                        <div class="mb-4">
                            <span class="text-xs text-gray-500 uppercase tracking-wider font-bold block mb-1">
                                "Category"
                            </span>
                            <p class="text-white font-semibold">{achievement.category.label()}</p>
                        </div>
                        <div>
                            <span class="text-xs text-gray-500 uppercase tracking-wider font-bold block mb-1">
                                "Winners"
                            </span>
                            <p class="text-[#FFB347] font-bold text-lg">{achievement.winners}</p>
                        </div>
                    </div>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_icons() {
        assert_eq!(category_icon(AchievementCategory::Award), IconKind::Trophy);
        assert_eq!(category_icon(AchievementCategory::Recognition), IconKind::Star);
        assert_eq!(category_tint(AchievementCategory::Award), "text-[#FFB347]");
        assert_eq!(category_tint(AchievementCategory::Competition), "text-blue-400");
    }

    #[test]
    fn test_filter_button_class() {
        assert!(filter_button_class(true).contains("text-[#FFB347]"));
        assert!(filter_button_class(false).contains("text-gray-500"));
    }

    #[test]
    fn test_every_card_resolves_by_id() {
        let catalog = Catalog::builtin();
        for achievement in catalog.achievements {
            assert_eq!(catalog.achievement(achievement.id).map(|a| a.title), Some(achievement.title));
        }
    }
}
