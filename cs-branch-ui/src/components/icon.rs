//! Stroke icons
//!
//! Inline 24x24 outline icons drawn with `currentColor`, so they follow the
//! surrounding text colour.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Award,
    Calendar,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    Clock,
    Close,
    ExternalLink,
    Facebook,
    Filter,
    Github,
    Instagram,
    Linkedin,
    Mail,
    MapPin,
    MessageSquare,
    MoreHorizontal,
    Moon,
    Phone,
    Search,
    Send,
    Star,
    Sun,
    Trophy,
    Twitter,
    User,
    Users,
    ZoomIn,
}

impl IconKind {
    /// Path data for each `<path>` of the icon
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::Award => &[
                "M12 15a6 6 0 1 0 0-12 6 6 0 0 0 0 12z",
                "M8.21 13.89 7 23l5-3 5 3-1.21-9.12",
            ],
            IconKind::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M3 10h18",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            ],
            IconKind::ChevronDown => &["m6 9 6 6 6-6"],
            IconKind::ChevronLeft => &["m15 18-6-6 6-6"],
            IconKind::ChevronRight => &["m9 18 6-6-6-6"],
            IconKind::Clock => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
            IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
            IconKind::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            IconKind::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
            IconKind::Filter => &["M22 3H2l8 9.46V19l4 2v-8.54L22 3z"],
            IconKind::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            IconKind::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconKind::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
            ],
            IconKind::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-10 7L2 7",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            ],
            IconKind::MessageSquare => &[
                "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
            ],
            IconKind::MoreHorizontal => &[
                "M12 13a1 1 0 1 0 0-2 1 1 0 0 0 0 2z",
                "M19 13a1 1 0 1 0 0-2 1 1 0 0 0 0 2z",
                "M5 13a1 1 0 1 0 0-2 1 1 0 0 0 0 2z",
            ],
            IconKind::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
            IconKind::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            IconKind::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "m21 21-4.3-4.3"],
            IconKind::Send => &["m22 2-7 20-4-9-9-4z", "M22 2 11 13"],
            IconKind::Star => &[
                "m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z",
            ],
            IconKind::Sun => &[
                "M12 16a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            IconKind::Trophy => &[
                "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
                "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
                "M4 22h16",
                "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
                "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
                "M18 2H6v7a6 6 0 0 0 12 0z",
            ],
            IconKind::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            IconKind::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            ],
            IconKind::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconKind::ZoomIn => &[
                "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z",
                "m21 21-4.35-4.35",
                "M11 8v6",
                "M8 11h6",
            ],
        }
    }

    /// Icon for a social network name, if there is one
    pub fn for_social(name: &str) -> Option<IconKind> {
        match name {
            "Facebook" => Some(IconKind::Facebook),
            "Twitter" => Some(IconKind::Twitter),
            "LinkedIn" => Some(IconKind::Linkedin),
            "Instagram" => Some(IconKind::Instagram),
            "GitHub" => Some(IconKind::Github),
            "Email" => Some(IconKind::Mail),
            _ => None,
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = 20)] size: u32,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_icons() {
        for channel in cs_branch::contact::SOCIAL_CHANNELS {
            assert!(IconKind::for_social(channel.name).is_some(), "{}", channel.name);
        }
        assert_eq!(IconKind::for_social("Myspace"), None);
    }
}
