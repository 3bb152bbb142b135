//! Page filters
//!
//! Pure functions from a slice of catalog records plus the user's current
//! selection to the records a page should render. UI components hold the
//! selection in a signal and call these on every change.

pub mod choice;
pub mod events;
pub mod team;

pub use choice::{
    filter_achievements, gallery_sections, AchievementFilter, Choice, GalleryFilter,
    GallerySection,
};
pub use events::{EventFilter, EventTab};
pub use team::{DomainAccordion, DomainGroup, TeamRoster};
