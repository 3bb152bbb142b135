//! # cs-branch
//!
//! Website of the IEEE Computer Society Student Branch at Kalasalingam Academy
//! of Research and Education. This crate holds everything about the site that
//! does not need a browser: the content catalog, the page filters, the
//! carousel and animation state machines, and a small host that serves the
//! compiled UI bundle.
//!
//! ## Modules
//!
//! - [`catalog`]: Static events, achievements, team, gallery and society records
//! - [`filter`]: Events filter engine and single-select page filters
//! - [`carousel`]: Gallery strip centering and auto-advance
//! - [`animation`]: Count-up, typewriter, one-shot reveal and header state
//! - [`scroll`]: Route-change and same-page anchor scrolling
//! - [`routes`]: Page paths and navigation
//! - [`theme`]: Light/dark theme
//! - [`contact`]: Contact form state and submission seam
//! - `config`, `server`: Static host (feature `server`)
//!
//! ## Quick Start
//!
//! ```rust
//! use cs_branch::catalog::Catalog;
//! use cs_branch::filter::{EventFilter, EventTab};
//!
//! let catalog = Catalog::builtin();
//! let mut filter = EventFilter::default();
//! filter.set_tab(EventTab::All);
//! filter.set_search("bootcamp");
//!
//! let events = filter.apply(catalog.events);
//! assert_eq!(events[0].title, "Web Development Bootcamp");
//! ```

pub mod animation;
pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod filter;
pub mod routes;
pub mod scroll;
pub mod theme;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use catalog::{Catalog, CatalogError, CatalogResult, CatalogSummary};

pub use filter::{Choice, EventFilter, EventTab, GalleryFilter, TeamRoster};

pub use carousel::{AutoAdvance, Direction, StripMetrics};

pub use contact::{ContactField, ContactForm, FormSubmitter, NoopSubmitter, SubmitError};

pub use routes::Page;

pub use theme::Theme;

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, ConfigNote, LogFormat};

#[cfg(feature = "server")]
pub use server::{build_router, serve, AppState, ServerError};
