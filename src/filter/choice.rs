//! Single-select filters with an "All" default

use serde::{Deserialize, Serialize};

use crate::catalog::{Achievement, AchievementLevel, GalleryCollection, GalleryItem};

/// A single-select filter value: everything, or one specific value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(selected) => selected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T: Copy> Choice<T> {
    /// "All" followed by one choice per option, for rendering a button row
    pub fn options(values: &[T]) -> Vec<Choice<T>> {
        std::iter::once(Choice::All)
            .chain(values.iter().copied().map(Choice::Only))
            .collect()
    }
}

impl<T: std::fmt::Display> Choice<T> {
    pub fn label(&self) -> String {
        match self {
            Choice::All => "All".to_string(),
            Choice::Only(value) => value.to_string(),
        }
    }
}

/// Achievements page filter, compared against the achievement level
pub type AchievementFilter = Choice<AchievementLevel>;

/// Achievements matching the level filter, in catalog order
pub fn filter_achievements<'a>(
    achievements: &'a [Achievement],
    filter: AchievementFilter,
) -> Vec<&'a Achievement> {
    achievements
        .iter()
        .filter(|a| filter.matches(&a.level))
        .collect()
}

/// Gallery page filter buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GalleryFilter {
    #[default]
    All,
    Workshop,
    Event,
    Hackathon,
    Social,
}

impl GalleryFilter {
    pub const ALL: &'static [GalleryFilter] = &[
        GalleryFilter::All,
        GalleryFilter::Workshop,
        GalleryFilter::Event,
        GalleryFilter::Hackathon,
        GalleryFilter::Social,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GalleryFilter::All => "All",
            GalleryFilter::Workshop => "Workshop",
            GalleryFilter::Event => "Event",
            GalleryFilter::Hackathon => "Hackathon",
            GalleryFilter::Social => "Social",
        }
    }

    /// Categories are free text, so "Hackathon" also picks up "Hackathons"
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            GalleryFilter::All => true,
            _ => item
                .category
                .to_lowercase()
                .contains(&self.label().to_lowercase()),
        }
    }
}

/// A gallery collection with its filtered items
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySection<'a> {
    pub collection: GalleryCollection,
    pub items: Vec<&'a GalleryItem>,
}

/// Filter every collection; only sections with at least one item are kept,
/// so an empty result means the page shows its empty state
pub fn gallery_sections<'a>(
    collections: impl IntoIterator<Item = (GalleryCollection, &'a [GalleryItem])>,
    filter: GalleryFilter,
) -> Vec<GallerySection<'a>> {
    collections
        .into_iter()
        .map(|(collection, items)| GallerySection {
            collection,
            items: items.iter().filter(|item| filter.matches(item)).collect(),
        })
        .filter(|section| !section.items.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn all_collections(
        catalog: &Catalog,
    ) -> Vec<(GalleryCollection, &'static [GalleryItem])> {
        GalleryCollection::ALL
            .iter()
            .map(|c| (*c, catalog.gallery(*c)))
            .collect()
    }

    #[test]
    fn test_choice_matches() {
        let all: Choice<u8> = Choice::All;
        assert!(all.matches(&3));
        assert!(Choice::Only(3).matches(&3));
        assert!(!Choice::Only(3).matches(&4));
    }

    #[test]
    fn test_choice_options_and_labels() {
        let options = Choice::options(AchievementLevel::ALL);
        let labels: Vec<String> = options.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["All", "International", "National", "University"]);
    }

    #[test]
    fn test_achievement_filter() {
        let catalog = Catalog::builtin();
        assert_eq!(filter_achievements(catalog.achievements, Choice::All).len(), 2);
        assert_eq!(
            filter_achievements(catalog.achievements, Choice::Only(AchievementLevel::International)).len(),
            2
        );
        assert!(
            filter_achievements(catalog.achievements, Choice::Only(AchievementLevel::National)).is_empty()
        );
    }

    #[test]
    fn test_gallery_all_keeps_every_section() {
        let catalog = Catalog::builtin();
        let sections = gallery_sections(all_collections(&catalog), GalleryFilter::All);
        assert_eq!(sections.len(), 3);
        assert!(sections.iter().all(|s| s.items.len() == 4));
    }

    #[test]
    fn test_gallery_substring_match() {
        let catalog = Catalog::builtin();

        let sections = gallery_sections(all_collections(&catalog), GalleryFilter::Workshop);
        let counts: Vec<(GalleryCollection, usize)> =
            sections.iter().map(|s| (s.collection, s.items.len())).collect();
        assert_eq!(
            counts,
            vec![(GalleryCollection::Robotics, 4), (GalleryCollection::Community, 1)]
        );

        let sections = gallery_sections(all_collections(&catalog), GalleryFilter::Hackathon);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].items[0].caption, "Hackathon Finals");
    }

    #[test]
    fn test_gallery_empty_when_nothing_matches() {
        static EMPTY: &[GalleryItem] = &[];
        let sections = gallery_sections(
            vec![(GalleryCollection::Robotics, EMPTY)],
            GalleryFilter::Social,
        );
        assert!(sections.is_empty());
    }
}
