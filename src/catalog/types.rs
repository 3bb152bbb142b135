//! Record types held by the static catalog
//!
//! Every record is built at compile time from `&'static str` fields, so the
//! whole catalog lives in read-only statics and is shared without cloning.
//! Closed vocabularies (event category, domain, status, achievement level...)
//! are enums whose display label is the exact text shown on the site.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{CatalogError, CatalogResult};

/// Declares a closed vocabulary enum with a display label per variant.
///
/// Labels double as the serde names and as the `FromStr` input (ASCII
/// case-insensitive).
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Label shown on the site
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.label().eq_ignore_ascii_case(s))
                    .ok_or_else(|| CatalogError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

labelled_enum! {
    /// Kind of event
    pub enum EventCategory ("event category") {
        Workshop => "Workshop",
        Hackathon => "Hackathon",
        Webinar => "Webinar",
        Social => "Social",
        Conference => "Conference",
    }
}

impl EventCategory {
    /// Options offered in the Events sidebar
    pub const FILTER_OPTIONS: &'static [EventCategory] = &[
        EventCategory::Workshop,
        EventCategory::Hackathon,
        EventCategory::Webinar,
        EventCategory::Social,
    ];
}

labelled_enum! {
    /// Technical domain an event belongs to
    pub enum EventDomain ("event domain") {
        WebDevelopment => "Web Development",
        AiMl => "AI/ML",
        HardwareIot => "Hardware/IoT",
        Cybersecurity => "Cybersecurity",
        General => "General",
    }
}

impl EventDomain {
    /// Options offered in the Events sidebar
    pub const FILTER_OPTIONS: &'static [EventDomain] = &[
        EventDomain::WebDevelopment,
        EventDomain::AiMl,
        EventDomain::HardwareIot,
        EventDomain::Cybersecurity,
    ];
}

labelled_enum! {
    /// Registration state of an event
    pub enum EventStatus ("event status") {
        /// Happening right now
        Live => "LIVE",
        /// Registration open
        Open => "OPEN",
        /// Registration closing soon
        Closing => "CLOSING",
        /// No seats left
        Full => "FULL",
        /// Already held
        Completed => "COMPLETED",
    }
}

labelled_enum! {
    /// Scope at which an achievement was recognized
    pub enum AchievementLevel ("achievement level") {
        International => "International",
        National => "National",
        University => "University",
    }
}

labelled_enum! {
    /// Kind of achievement
    pub enum AchievementCategory ("achievement category") {
        Award => "Award",
        Competition => "Competition",
        Recognition => "Recognition",
    }
}

labelled_enum! {
    /// The three fixed photo collections shown on the Gallery page
    pub enum GalleryCollection ("gallery collection") {
        Robotics => "Robotics & Innovation",
        Highlights => "Events & Highlights",
        Community => "Community Moments",
    }
}

impl EventStatus {
    /// Already held; everything else is still ahead or in progress
    pub fn is_past(self) -> bool {
        matches!(self, EventStatus::Completed)
    }
}

/// A chapter event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: &'static str,
    pub title: &'static str,
    /// ISO date, `YYYY-MM-DD`
    pub date: &'static str,
    pub time: &'static str,
    pub venue: &'static str,
    pub category: EventCategory,
    pub domain: EventDomain,
    pub status: EventStatus,
    pub image: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<&'static str>,
}

impl Event {
    /// Parse the event date
    pub fn date_value(&self) -> CatalogResult<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").map_err(|_| CatalogError::InvalidDate {
            id: self.id.to_string(),
            value: self.date.to_string(),
        })
    }

    /// Long-form date such as "January 05, 2025", or the raw date if it
    /// does not parse
    pub fn long_date(&self) -> String {
        self.date_value()
            .map(|d| d.format("%B %d, %Y").to_string())
            .unwrap_or_else(|_| self.date.to_string())
    }
}

/// A recognition won by the chapter or its members
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub level: AchievementLevel,
    pub date: &'static str,
    pub winners: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub image: &'static str,
}

/// A faculty advisor, office bearer or domain member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'static str>,
    pub is_lead: bool,
}

impl TeamMember {
    /// Faculty advisors are recognized by their role text
    pub fn is_advisor(&self) -> bool {
        self.role.contains("Advisor")
    }

    /// Office bearers: not an advisor and not attached to a domain
    pub fn is_executive(&self) -> bool {
        !self.is_advisor() && self.domain.is_none()
    }
}

/// A photo in one of the gallery collections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    pub id: &'static str,
    pub src: &'static str,
    pub caption: &'static str,
    /// Free text, matched by substring
    pub category: &'static str,
}

/// A notice on the About page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Announcement {
    pub id: &'static str,
    /// Short date, e.g. `31/10/25`
    pub date: &'static str,
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_date: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prizes: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
}

impl Announcement {
    /// Modal heading: the title when present, otherwise the event line
    pub fn heading(&self) -> &'static str {
        self.title.unwrap_or(self.event)
    }

    /// Long date when present, otherwise the short one
    pub fn display_date(&self) -> &'static str {
        self.full_date.unwrap_or(self.date)
    }
}

/// An affiliated IEEE society
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Society {
    pub id: &'static str,
    pub name: &'static str,
    pub logo: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
}

impl Society {
    /// Name without the leading "IEEE " (the parent society keeps its name)
    pub fn short_name(&self) -> &'static str {
        match self.name.strip_prefix("IEEE ") {
            Some(rest) if !rest.is_empty() => rest,
            _ => self.name,
        }
    }
}

/// A point on the chapter timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(date: &'static str) -> Event {
        Event {
            id: "x",
            title: "Sample",
            date,
            time: "10:00 AM",
            venue: "Lab",
            category: EventCategory::Workshop,
            domain: EventDomain::General,
            status: EventStatus::Open,
            image: "",
            description: "",
            speaker: None,
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for status in EventStatus::ALL {
            assert_eq!(status.label().parse::<EventStatus>().unwrap(), *status);
        }
        for domain in EventDomain::ALL {
            assert_eq!(domain.to_string().parse::<EventDomain>().unwrap(), *domain);
        }
        assert_eq!("ai/ml".parse::<EventDomain>().unwrap(), EventDomain::AiMl);
    }

    #[test]
    fn test_unknown_label() {
        let err = "Seminar".parse::<EventCategory>().unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownVariant {
                kind: "event category",
                value: "Seminar".to_string(),
            }
        );
    }

    #[test]
    fn test_long_date() {
        assert_eq!(sample_event("2025-01-05").long_date(), "January 05, 2025");
        assert_eq!(sample_event("soon").long_date(), "soon");
        assert!(matches!(
            sample_event("soon").date_value(),
            Err(CatalogError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_society_short_name() {
        let society = Society {
            id: "1",
            name: "IEEE Signal Processing Society",
            logo: "",
            description: None,
            link: None,
        };
        assert_eq!(society.short_name(), "Signal Processing Society");

        let parent = Society { name: "IEEE", ..society };
        assert_eq!(parent.short_name(), "IEEE");
    }
}
