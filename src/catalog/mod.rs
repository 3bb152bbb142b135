//! Static Content Catalog
//!
//! Read-only records behind every page of the site. The catalog is created
//! once at compile time and handed to pages by reference; nothing is created,
//! mutated or deleted at runtime.

pub mod data;
pub mod error;
pub mod types;

pub use error::{CatalogError, CatalogResult};
pub use types::{
    Achievement, AchievementCategory, AchievementLevel, Announcement, Event, EventCategory,
    EventDomain, EventStatus, GalleryCollection, GalleryItem, Milestone, Society, TeamMember,
};

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// All site content
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Catalog {
    pub events: &'static [Event],
    pub achievements: &'static [Achievement],
    pub team: &'static [TeamMember],
    pub robotics_gallery: &'static [GalleryItem],
    pub highlights_gallery: &'static [GalleryItem],
    pub community_gallery: &'static [GalleryItem],
    pub announcements: &'static [Announcement],
    pub societies: &'static [Society],
    pub milestones: &'static [Milestone],
}

impl Catalog {
    /// The content compiled into the site
    pub const fn builtin() -> Self {
        Self {
            events: data::EVENTS,
            achievements: data::ACHIEVEMENTS,
            team: data::TEAM_MEMBERS,
            robotics_gallery: data::ROBOTICS_GALLERY,
            highlights_gallery: data::HIGHLIGHTS_GALLERY,
            community_gallery: data::COMMUNITY_GALLERY,
            announcements: data::ANNOUNCEMENTS,
            societies: data::SOCIETIES,
            milestones: data::MILESTONES,
        }
    }

    /// Items of one gallery collection
    pub fn gallery(&self, collection: GalleryCollection) -> &'static [GalleryItem] {
        match collection {
            GalleryCollection::Robotics => self.robotics_gallery,
            GalleryCollection::Highlights => self.highlights_gallery,
            GalleryCollection::Community => self.community_gallery,
        }
    }

    pub fn event(&self, id: &str) -> Option<&'static Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn achievement(&self, id: &str) -> Option<&'static Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn announcement(&self, id: &str) -> Option<&'static Announcement> {
        self.announcements.iter().find(|a| a.id == id)
    }

    pub fn society(&self, id: &str) -> Option<&'static Society> {
        self.societies.iter().find(|s| s.id == id)
    }

    /// First `limit` events that have not been held yet, in catalog order
    pub fn upcoming_events(&self, limit: usize) -> Vec<&'static Event> {
        self.events
            .iter()
            .filter(|e| !e.status.is_past())
            .take(limit)
            .collect()
    }

    /// Check the per-collection id uniqueness invariant and event dates
    pub fn validate(&self) -> CatalogResult<()> {
        ensure_unique("events", self.events.iter().map(|e| e.id))?;
        ensure_unique("achievements", self.achievements.iter().map(|a| a.id))?;
        ensure_unique("team", self.team.iter().map(|m| m.id))?;
        for collection in GalleryCollection::ALL {
            ensure_unique(
                collection.label(),
                self.gallery(*collection).iter().map(|g| g.id),
            )?;
        }
        ensure_unique("announcements", self.announcements.iter().map(|a| a.id))?;
        ensure_unique("societies", self.societies.iter().map(|s| s.id))?;

        for event in self.events {
            event.date_value()?;
        }

        tracing::debug!("Catalog validated: {}", self.summary());
        Ok(())
    }

    /// Record counts per collection
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            events: self.events.len(),
            achievements: self.achievements.len(),
            team_members: self.team.len(),
            gallery_items: GalleryCollection::ALL
                .iter()
                .map(|c| self.gallery(*c).len())
                .sum(),
            announcements: self.announcements.len(),
            societies: self.societies.len(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ensure_unique<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> CatalogResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Record counts, logged by `cs-branch check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub events: usize,
    pub achievements: usize,
    pub team_members: usize,
    pub gallery_items: usize,
    pub announcements: usize,
    pub societies: usize,
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} events, {} achievements, {} team members, {} photos, {} announcements, {} societies",
            self.events,
            self.achievements,
            self.team_members,
            self.gallery_items,
            self.announcements,
            self.societies
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        Catalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_duplicate_id_detected() {
        static DUPES: &[Society] = &[
            Society {
                id: "1",
                name: "A",
                logo: "",
                description: None,
                link: None,
            },
            Society {
                id: "1",
                name: "B",
                logo: "",
                description: None,
                link: None,
            },
        ];
        let catalog = Catalog {
            societies: DUPES,
            ..Catalog::builtin()
        };

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateId {
                collection: "societies",
                id: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_sample_catalog_statuses() {
        let statuses: Vec<EventStatus> = Catalog::builtin().events.iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![
                EventStatus::Live,
                EventStatus::Open,
                EventStatus::Open,
                EventStatus::Closing
            ]
        );
    }

    #[test]
    fn test_upcoming_events_in_catalog_order() {
        let upcoming = Catalog::builtin().upcoming_events(3);
        let ids: Vec<&str> = upcoming.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_upcoming_events_skip_completed() {
        let mut events = data::EVENTS.to_vec();
        events[0].status = EventStatus::Completed;
        events[2].status = EventStatus::Completed;
        let catalog = Catalog {
            events: Box::leak(events.into_boxed_slice()),
            ..Catalog::builtin()
        };

        let ids: Vec<&str> = catalog.upcoming_events(3).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["2", "4"]);
        assert!(catalog.upcoming_events(10).iter().all(|e| !e.status.is_past()));
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.event("4").map(|e| e.title), Some("IoT Future Trends"));
        assert_eq!(catalog.announcement("2").map(|a| a.heading()), Some("IEEE Codefest 2025"));
        assert!(catalog.society("99").is_none());
        assert!(catalog.achievement("2").is_some());
    }

    #[test]
    fn test_summary() {
        let summary = Catalog::builtin().summary();
        assert_eq!(summary.events, 4);
        assert_eq!(summary.gallery_items, 12);
        assert_eq!(summary.team_members, 12);
    }
}
