//! About Page
//!
//! Slideshow header, the stats bar, the chapter history, announcements and
//! the affiliated societies. Announcements and societies open a detail
//! modal selected by record id.

use std::time::Duration;

use cs_branch::animation::{stagger_delay_ms, Cycle, SLIDESHOW_INTERVAL_MS};
use cs_branch::catalog::data::{ABOUT_SLIDESHOW, LOGO_FULL};
use cs_branch::catalog::{Announcement, Catalog, Milestone, Society};
use leptos::*;

use crate::components::{CloseButton, CountUpNumber, Icon, IconKind, Modal, RevealOnScroll};

const ABOUT_TEXT: &str = "The KARE IEEE Computer Society Student Branch Chapter is a dynamic student-led community that promotes learning and innovation in computing. It conducts hands-on workshops, seminars, and events in areas like AI, Quantum Computing, Cybersecurity, and Software Development. These activities help students gain valuable practical skills beyond the classroom. The chapter also connects members with industry professionals, researchers, and global IEEE CS initiatives. By bridging academics with emerging technologies, it encourages collaboration and innovation. Overall, it empowers students to grow as future-ready computing professionals.";

const SOCIETY_FALLBACK_TEXT: &str = "Information regarding this society will be updated soon.";
const MISSING_LINK: &str = "Link not available";
const MILESTONE_STAGGER_MS: u32 = 100;

#[component]
pub fn About() -> impl IntoView {
    let catalog = Catalog::builtin();
    let selected_announcement = create_rw_signal(None::<&'static str>);
    let selected_society = create_rw_signal(None::<&'static str>);

    view! {
        <div class="pt-20 md:pt-0 min-h-screen bg-white dark:bg-[#111827] font-sans overflow-x-hidden">
            <Slideshow />

            <div class="bg-[#FFC83C] w-full">
                <div class="max-w-4xl mx-auto px-4">
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 sm:gap-0 py-6 sm:py-4">
                        <Stat end=10 label="No of Events" divider=true />
                        <Stat end=30 label="No of Publications" divider=true />
                        <Stat end=40 label="No of Projects" divider=false />
                    </div>
                </div>
            </div>

            <div class="max-w-4xl mx-auto px-4 py-12 md:py-16 space-y-12">
                <h1 class="text-xl md:text-2xl font-bold uppercase tracking-widest text-black dark:text-white text-center mb-6">
                    "About Us"
                </h1>

                <RevealOnScroll>
                    <div class="bg-white dark:bg-[#1F2937] rounded-[24px] md:rounded-[30px] border border-gray-200 dark:border-white/10 shadow-[0_8px_30px_rgb(0,0,0,0.04)] p-6 md:p-8 relative">
                        <div class="absolute top-6 right-6 text-gray-300">
                            <Icon kind=IconKind::MoreHorizontal size=24 />
                        </div>
                        <div class="flex flex-col md:flex-row gap-8 items-center md:items-start">
                            <div class="w-full md:w-1/3 flex items-center justify-center md:justify-start pt-4">
                                <img
                                    src=LOGO_FULL
                                    alt="IEEE CS Logo"
                                    class="w-32 md:w-40 h-auto object-contain"
                                    loading="lazy"
                                    decoding="async"
                                />
                            </div>
                            <div class="flex-1">
                                <h3 class="font-bold text-black dark:text-white text-lg mb-3 text-center md:text-left">
                                    "About IEEE CS :"
                                </h3>
                                <p class="text-sm md:text-base text-gray-600 dark:text-gray-300 leading-relaxed text-left md:text-justify">
                                    {ABOUT_TEXT}
                                </p>
                            </div>
                        </div>
                    </div>
                </RevealOnScroll>

                <Timeline milestones=catalog.milestones />

                <section>
                    <SectionTitle text="Announcements" />
                    <div class="bg-white dark:bg-[#1F2937] rounded-[24px] border border-gray-200 dark:border-white/10 shadow-sm overflow-hidden">
                        {catalog
                            .announcements
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                let last = i + 1 == catalog.announcements.len();
                                view! {
                                    <AnnouncementRow
                                        item=item
                                        last=last
                                        on_open=Callback::new(move |_| selected_announcement.set(Some(item.id)))
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section>
                    <SectionTitle text="Societies" />
                    <div class="bg-white dark:bg-[#1F2937] rounded-[24px] border border-gray-200 dark:border-white/10 p-6 shadow-sm">
                        <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-5 gap-4 items-stretch">
                            {catalog
                                .societies
                                .iter()
                                .map(|society| {
                                    view! {
                                        <SocietyTile
                                            society=society
                                            on_open=Callback::new(move |_| selected_society.set(Some(society.id)))
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>
            </div>

            {move || {
                selected_announcement
                    .get()
                    .and_then(|id| catalog.announcement(id))
                    .map(|announcement| {
                        view! {
                            <AnnouncementDetails
                                announcement=announcement
                                on_close=Callback::new(move |_| selected_announcement.set(None))
                            />
                        }
                    })
            }}

            {move || {
                selected_society
                    .get()
                    .and_then(|id| catalog.society(id))
                    .map(|society| {
                        view! {
                            <SocietyDetails
                                society=society
                                on_close=Callback::new(move |_| selected_society.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Background images cross-fading on a fixed interval behind the brand mark
#[component]
fn Slideshow() -> impl IntoView {
    let slide = create_rw_signal(Cycle::new(ABOUT_SLIDESHOW.len()));

    match set_interval_with_handle(
        move || slide.update(|c| {
            c.advance();
        }),
        Duration::from_millis(u64::from(SLIDESHOW_INTERVAL_MS)),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => web_sys::console::error_1(&format!("Slideshow timer failed: {:?}", e).into()),
    }

    view! {
        <div class="bg-black text-white h-[240px] md:h-[400px] flex flex-col items-center justify-center relative overflow-hidden">
            {ABOUT_SLIDESHOW
                .iter()
                .enumerate()
                .map(|(i, img)| {
                    view! {
                        <div
                            class=move || slide_class(slide.with(Cycle::index) == i)
                            style=format!("background-image: url('{}')", img)
                        />
                    }
                })
                .collect_view()}
            <div class="absolute inset-0 bg-black/40" />

            <div class="relative z-10 text-center flex flex-col items-center gap-3 md:gap-4 fade-in px-4">
                <div class="flex items-center gap-3 md:gap-4">
                    <div class="w-12 h-12 md:w-16 md:h-16 rounded-full bg-[#FFB347] flex items-center justify-center shadow-lg border-2 border-white/10 shrink-0">
                        <span class="text-black text-2xl md:text-3xl font-bold">"Φ"</span>
                    </div>
                    <div class="text-left border-l border-gray-400 pl-3 md:pl-4">
                        <span class="block text-lg md:text-xl font-bold leading-none drop-shadow-sm">"IEEE"</span>
                        <span class="block text-lg md:text-xl font-bold leading-none drop-shadow-sm">"COMPUTER"</span>
                        <span class="block text-xs md:text-sm font-medium tracking-wider text-[#FFB347] drop-shadow-sm">
                            "SOCIETY KARE"
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Stat(end: u32, label: &'static str, divider: bool) -> impl IntoView {
    let class = if divider {
        "text-center sm:border-r border-black/10 pb-4 sm:pb-0 border-b sm:border-b-0"
    } else {
        "text-center"
    };

    view! {
        <div class=class>
            <span class="block text-2xl font-black text-[#0D0D0D] leading-tight">
                <CountUpNumber end=end />
            </span>
            <span class="text-[10px] font-bold uppercase tracking-widest text-[#0D0D0D] opacity-80">
                {label}
            </span>
        </div>
    }
}

#[component]
fn SectionTitle(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-sm font-bold text-black dark:text-white uppercase mb-3 tracking-wide ml-2">{text}</h2>
    }
}

#[component]
fn Timeline(milestones: &'static [Milestone]) -> impl IntoView {
    view! {
        <section>
            <SectionTitle text="Our Journey" />
            <div class="border-l-2 border-[#FFB347]/40 ml-4 space-y-8">
                {milestones
                    .iter()
                    .enumerate()
                    .map(|(i, m)| {
                        view! {
                            <RevealOnScroll delay=stagger_delay_ms(i, MILESTONE_STAGGER_MS)>
                                <div class="relative ml-8">
                                    <span class="absolute -left-[3.25rem] top-0 flex items-center justify-center w-10 h-10 rounded-full bg-white dark:bg-[#1F2937] border-2 border-[#FFB347] text-lg">
                                        {m.icon}
                                    </span>
                                    <p class="text-xs font-black text-[#FFB347] tracking-widest">{m.year}</p>
                                    <h3 class="font-bold text-black dark:text-white">{m.title}</h3>
                                    <p class="text-sm text-gray-600 dark:text-gray-400">{m.description}</p>
                                </div>
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn AnnouncementRow(item: &'static Announcement, last: bool, on_open: Callback<()>) -> impl IntoView {
    let border = if last { "" } else { "border-b border-gray-100 dark:border-white/5" };

    view! {
        <div
            on:click=move |_| on_open.call(())
            class=format!(
                "p-5 flex flex-col relative cursor-pointer hover:bg-gray-50 dark:hover:bg-white/5 transition-all duration-200 group {}",
                border,
            )
        >
            <span class="text-[10px] text-gray-500 font-medium mb-1 underline decoration-gray-300 underline-offset-2">
                "Date: " {item.date}
            </span>
            <span class="text-sm font-semibold text-gray-800 dark:text-gray-200 group-hover:text-[#FFB347] transition-colors">
                {item.event}
            </span>
            <div class="absolute top-5 right-5 text-gray-300 group-hover:text-gray-600 transition-colors">
                <Icon kind=IconKind::MoreHorizontal size=16 />
            </div>
        </div>
    }
}

#[component]
fn AnnouncementDetails(announcement: &'static Announcement, on_close: Callback<()>) -> impl IntoView {
    let link = announcement.link;

    view! {
        <Modal
            on_close=on_close
            backdrop_class="bg-black/60 backdrop-blur-[2px]"
            panel_class="bg-white dark:bg-[#1F2937] rounded-[24px] md:rounded-[32px] p-6 md:p-10 max-w-4xl shadow-[0_20px_50px_rgba(0,0,0,0.3)]"
        >
            <CloseButton on_close=on_close />

            <div class="mt-4 grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-8 items-center">
                <div class="rounded-2xl overflow-hidden shadow-lg border border-gray-100 h-[200px] sm:h-[300px] md:h-[400px]">
                    <img
                        src=announcement.image.unwrap_or(LOGO_FULL)
                        alt=announcement.heading()
                        class="w-full h-full object-cover"
                    />
                </div>

                <div class="flex flex-col justify-center space-y-6">
                    <div class="space-y-4">
                        <Detail label="Event Name:">
                            <h3 class="text-xl md:text-2xl font-black text-black dark:text-white leading-tight">
                                {announcement.heading()}
                            </h3>
                        </Detail>
                        <Detail label="Dates:">
                            <p class="text-sm font-semibold text-gray-800 dark:text-gray-200">
                                {announcement.display_date()}
                            </p>
                        </Detail>
                        {announcement.prizes.map(|prizes| {
                            view! {
                                <Detail label="Prizes:">
                                    <p class="text-sm font-semibold text-[#FFB347]">{prizes}</p>
                                </Detail>
                            }
                        })}
                    </div>

                    <div class="pt-4 border-t border-gray-100 dark:border-white/10">
                        <p class="text-xs font-bold text-gray-400 uppercase tracking-wide mb-2">"Registration Link:"</p>
                        <a
                            href=link_href(link)
                            target="_blank"
                            rel="noopener noreferrer"
                            class="block text-[#003057] text-sm font-bold hover:underline break-all p-3 bg-blue-50 rounded-lg border border-blue-100"
                        >
                            {link_text(link)}
                        </a>
                    </div>
                </div>
            </div>
        </Modal>
    }
}

#[component]
fn Detail(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <p class="text-xs font-bold text-gray-400 uppercase tracking-wide mb-1">{label}</p>
            {children()}
        </div>
    }
}

#[component]
fn SocietyTile(society: &'static Society, on_open: Callback<()>) -> impl IntoView {
    let branded = society_tint(society).is_some();
    let tile = match society_tint(society) {
        Some(tint) => format!("{} border-transparent", tint),
        None => "bg-white dark:bg-[#111827] border-gray-100 dark:border-white/10 hover:border-gray-300 hover:shadow-md".to_string(),
    };

    view! {
        <div
            on:click=move |_| on_open.call(())
            class=format!(
                "cursor-pointer group flex flex-col items-center justify-between p-3 rounded-2xl transition-all duration-300 hover:scale-105 border {}",
                tile,
            )
        >
            <div class=format!(
                "w-full aspect-square flex items-center justify-center mb-2 rounded-xl overflow-hidden p-2 {}",
                if branded { "bg-white/10" } else { "bg-transparent" },
            )>
                <img
                    src=society.logo
                    alt=society.name
                    class=logo_class(branded)
                    loading="lazy"
                    decoding="async"
                />
            </div>
            <span class=format!(
                "text-[9px] font-bold uppercase tracking-wider text-center leading-tight line-clamp-2 {}",
                if branded { "text-white" } else { "text-gray-500 group-hover:text-[#003057]" },
            )>
                {society.short_name()}
            </span>
        </div>
    }
}

#[component]
fn SocietyDetails(society: &'static Society, on_close: Callback<()>) -> impl IntoView {
    let tint = society_tint(society);
    let frame = tint.unwrap_or("bg-white border border-gray-100 shadow-md");

    view! {
        <Modal
            on_close=on_close
            backdrop_class="bg-black/60 backdrop-blur-[2px]"
            panel_class="bg-white dark:bg-[#1F2937] rounded-[24px] md:rounded-[32px] p-6 md:p-8 max-w-2xl shadow-[0_20px_50px_rgba(0,0,0,0.3)]"
        >
            <CloseButton on_close=on_close />

            <h2 class="text-xl md:text-2xl font-bold text-black dark:text-white mb-6 mt-4 text-center md:text-left">
                {society.name}
            </h2>

            <div class="flex flex-col md:flex-row gap-6 items-center md:items-start">
                <div class=format!(
                    "w-32 h-32 md:w-40 md:h-40 shrink-0 rounded-3xl flex items-center justify-center p-6 shadow-inner {}",
                    frame,
                )>
                    <img src=society.logo alt=society.name class=logo_class(tint.is_some()) />
                </div>

                <div class="flex-1 space-y-6">
                    <p class="text-sm text-gray-600 dark:text-gray-300 leading-relaxed text-justify">
                        {society.description.unwrap_or(SOCIETY_FALLBACK_TEXT)}
                    </p>
                    <div>
                        <p class="text-xs font-bold text-gray-900 dark:text-gray-100 mb-1">
                            {format!("To know more about the {} visit to this link :", society.name)}
                        </p>
                        <a
                            href=link_href(society.link)
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-[#003057] dark:text-blue-300 text-sm font-medium hover:text-[#FFB347] transition-colors break-all"
                        >
                            "(" {link_text(society.link)} ")"
                        </a>
                    </div>
                </div>
            </div>
        </Modal>
    }
}

fn slide_class(active: bool) -> &'static str {
    if active {
        "absolute inset-0 bg-cover bg-center transition-opacity duration-1000 ease-in-out opacity-40"
    } else {
        "absolute inset-0 bg-cover bg-center transition-opacity duration-1000 ease-in-out opacity-0"
    }
}

/// Brand background for societies whose logo is drawn white on color
fn society_tint(society: &Society) -> Option<&'static str> {
    if society.name.contains("Signal Processing") {
        Some("bg-[#76B900]")
    } else if society.name == "IEEE" {
        Some("bg-[#00629B]")
    } else {
        None
    }
}

fn logo_class(branded: bool) -> &'static str {
    if branded {
        "w-full h-full object-contain brightness-0 invert"
    } else {
        "w-full h-full object-contain"
    }
}

fn link_href(link: Option<&'static str>) -> &'static str {
    link.unwrap_or("#")
}

fn link_text(link: Option<&'static str>) -> &'static str {
    link.unwrap_or(MISSING_LINK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn society(name: &'static str) -> Society {
        Society {
            id: "x",
            name,
            logo: "logo.png",
            description: None,
            link: None,
        }
    }

    #[test]
    fn test_society_tint() {
        assert_eq!(society_tint(&society("IEEE Signal Processing Society")), Some("bg-[#76B900]"));
        assert_eq!(society_tint(&society("IEEE")), Some("bg-[#00629B]"));
        assert_eq!(society_tint(&society("IEEE Computer Society")), None);
    }

    #[test]
    fn test_missing_link_fallbacks() {
        assert_eq!(link_href(None), "#");
        assert_eq!(link_text(None), "Link not available");
        assert_eq!(link_text(Some("https://ieee.org")), "https://ieee.org");
    }

    #[test]
    fn test_slide_visibility() {
        assert!(slide_class(true).ends_with("opacity-40"));
        assert!(slide_class(false).ends_with("opacity-0"));
    }

    #[test]
    fn test_every_announcement_resolves_by_id() {
        let catalog = Catalog::builtin();
        for item in catalog.announcements {
            assert_eq!(catalog.announcement(item.id).map(|a| a.id), Some(item.id));
        }
    }
}
