//! Events page filter engine
//!
//! A filter is plain data: a search string, three multi-select dimensions and
//! a status tab. Applying it is a pure scan over the event slice, re-run on
//! every keystroke; the catalog is small enough that nothing is cached.
//!
//! Dimensions combine with AND, values inside one multi-select with OR, and
//! an empty selection leaves its dimension unconstrained.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{CatalogError, Event, EventCategory, EventDomain, EventStatus};

/// Status bucket selected by the tab strip above the event grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventTab {
    All,
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl EventTab {
    /// Tabs in display order
    pub const ALL: &'static [EventTab] = &[
        EventTab::All,
        EventTab::Upcoming,
        EventTab::Ongoing,
        EventTab::Completed,
    ];

    /// Statuses admitted by this tab; `None` means no constraint
    pub fn statuses(&self) -> Option<&'static [EventStatus]> {
        match self {
            EventTab::All => None,
            EventTab::Upcoming => Some(&[EventStatus::Open, EventStatus::Closing]),
            EventTab::Ongoing => Some(&[EventStatus::Live]),
            EventTab::Completed => Some(&[EventStatus::Completed, EventStatus::Full]),
        }
    }

    pub fn admits(&self, status: EventStatus) -> bool {
        self.statuses().map_or(true, |set| set.contains(&status))
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventTab::All => "All",
            EventTab::Upcoming => "Upcoming",
            EventTab::Ongoing => "Ongoing",
            EventTab::Completed => "Completed",
        }
    }
}

impl fmt::Display for EventTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for EventTab {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventTab::ALL
            .iter()
            .copied()
            .find(|tab| tab.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownVariant {
                kind: "event tab",
                value: s.to_string(),
            })
    }
}

/// Active selections on the Events page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventFilter {
    /// Case-insensitive substring of the title
    pub search: String,
    pub categories: Vec<EventCategory>,
    pub domains: Vec<EventDomain>,
    pub statuses: Vec<EventStatus>,
    pub tab: EventTab,
}

impl EventFilter {
    /// Filter with no constraint at all, including the tab
    pub fn unfiltered() -> Self {
        Self {
            tab: EventTab::All,
            ..Self::default()
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_tab(&mut self, tab: EventTab) {
        self.tab = tab;
    }

    pub fn toggle_category(&mut self, category: EventCategory) {
        toggle(&mut self.categories, category);
    }

    pub fn toggle_domain(&mut self, domain: EventDomain) {
        toggle(&mut self.domains, domain);
    }

    pub fn toggle_status(&mut self, status: EventStatus) {
        toggle(&mut self.statuses, status);
    }

    /// Sidebar "Clear All": drop search and selections, keep the tab
    pub fn clear_selections(&mut self) {
        self.search.clear();
        self.categories.clear();
        self.domains.clear();
        self.statuses.clear();
    }

    /// Empty-state "clear filters": every predicate back to unconstrained
    pub fn clear(&mut self) {
        self.clear_selections();
        self.tab = EventTab::All;
    }

    /// Whether any sidebar selection or search text is active
    pub fn has_selections(&self) -> bool {
        !self.search.is_empty()
            || !self.categories.is_empty()
            || !self.domains.is_empty()
            || !self.statuses.is_empty()
    }

    /// Whether the event satisfies every active predicate
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_search(event)
            && any_or_empty(&self.categories, &event.category)
            && any_or_empty(&self.domains, &event.domain)
            && any_or_empty(&self.statuses, &event.status)
            && self.tab.admits(event.status)
    }

    /// Substring match on the title, whitespace included
    fn matches_search(&self, event: &Event) -> bool {
        self.search.is_empty() || event.title.to_lowercase().contains(&self.search.to_lowercase())
    }

    /// Events satisfying the filter, in catalog order
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let matched: Vec<&Event> = events.iter().filter(|e| self.matches(e)).collect();
        tracing::trace!(
            tab = %self.tab,
            search = %self.search,
            matched = matched.len(),
            total = events.len(),
            "Filtered events"
        );
        matched
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}

fn any_or_empty<T: PartialEq>(selected: &[T], value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn events() -> &'static [Event] {
        Catalog::builtin().events
    }

    fn ids(events: &[&Event]) -> Vec<&'static str> {
        events.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_default_tab_is_upcoming() {
        let filter = EventFilter::default();
        assert_eq!(filter.tab, EventTab::Upcoming);
        assert!(!filter.has_selections());
    }

    #[test]
    fn test_upcoming_excludes_live() {
        let filter = EventFilter::default();
        let result = filter.apply(events());

        assert_eq!(result.len(), 3);
        assert!(result
            .iter()
            .all(|e| matches!(e.status, EventStatus::Open | EventStatus::Closing)));
        assert_eq!(ids(&result), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_tab_buckets() {
        let mut filter = EventFilter::unfiltered();
        filter.set_tab(EventTab::Ongoing);
        assert_eq!(ids(&filter.apply(events())), vec!["1"]);

        filter.set_tab(EventTab::Completed);
        assert!(filter.apply(events()).is_empty());

        filter.set_tab(EventTab::All);
        assert_eq!(filter.apply(events()).len(), events().len());
    }

    #[test]
    fn test_search_is_case_insensitive_on_title() {
        let mut filter = EventFilter::unfiltered();
        filter.set_search("hACKathon");
        assert_eq!(ids(&filter.apply(events())), vec!["1"]);

        // Description text is not searched
        filter.set_search("MERN");
        assert!(filter.apply(events()).is_empty());
    }

    #[test]
    fn test_search_whitespace_is_significant() {
        let mut filter = EventFilter::unfiltered();
        filter.set_search("2025");
        assert_eq!(ids(&filter.apply(events())), vec!["1"]);

        // "2025" ends the title, so a trailing space rules it out
        filter.set_search("2025 ");
        assert!(filter.apply(events()).is_empty());
        assert!(filter.has_selections());

        filter.set_search("   ");
        assert!(filter.apply(events()).is_empty());
    }

    #[test]
    fn test_or_within_dimension_and_across() {
        let mut filter = EventFilter::unfiltered();
        filter.toggle_category(EventCategory::Workshop);
        filter.toggle_category(EventCategory::Webinar);
        assert_eq!(ids(&filter.apply(events())), vec!["2", "3", "4"]);

        filter.toggle_domain(EventDomain::WebDevelopment);
        assert_eq!(ids(&filter.apply(events())), vec!["2"]);

        filter.toggle_status(EventStatus::Closing);
        assert!(filter.apply(events()).is_empty());
    }

    #[test]
    fn test_toggle_removes_existing() {
        let mut filter = EventFilter::unfiltered();
        filter.toggle_domain(EventDomain::AiMl);
        filter.toggle_domain(EventDomain::AiMl);
        assert!(filter.domains.is_empty());
    }

    #[test]
    fn test_every_combination_is_a_sound_subset() {
        let all = events();
        for tab in EventTab::ALL {
            for category in EventCategory::ALL {
                for domain in EventDomain::ALL {
                    for status in EventStatus::ALL {
                        for search in ["", "web", "zzz"] {
                            let mut filter = EventFilter::unfiltered();
                            filter.set_tab(*tab);
                            filter.toggle_category(*category);
                            filter.toggle_domain(*domain);
                            filter.toggle_status(*status);
                            filter.set_search(search);

                            let result = filter.apply(all);
                            assert!(result.len() <= all.len());
                            for event in &result {
                                assert!(all.iter().any(|e| e.id == event.id));
                                assert_eq!(event.category, *category);
                                assert_eq!(event.domain, *domain);
                                assert_eq!(event.status, *status);
                                assert!(tab.admits(event.status));
                                assert!(event.title.to_lowercase().contains(search));
                            }
                            // Nothing that satisfies the predicates is dropped
                            let expected = all.iter().filter(|e| filter.matches(e)).count();
                            assert_eq!(result.len(), expected);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_clear_restores_full_list() {
        let mut filter = EventFilter::default();
        filter.set_search("bootcamp");
        filter.toggle_category(EventCategory::Workshop);
        filter.toggle_status(EventStatus::Open);
        assert_eq!(filter.apply(events()).len(), 1);

        filter.clear();
        assert_eq!(filter.search, "");
        assert_eq!(filter, EventFilter::unfiltered());
        assert_eq!(filter.apply(events()).len(), events().len());
    }

    #[test]
    fn test_clear_selections_keeps_tab() {
        let mut filter = EventFilter::default();
        filter.toggle_domain(EventDomain::AiMl);
        filter.clear_selections();
        assert_eq!(filter.tab, EventTab::Upcoming);
        assert!(!filter.has_selections());
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("ongoing".parse::<EventTab>().unwrap(), EventTab::Ongoing);
        assert!("later".parse::<EventTab>().is_err());
    }
}
