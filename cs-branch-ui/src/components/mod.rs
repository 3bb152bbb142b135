//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod carousel;
pub mod count_up;
pub mod footer;
pub mod icon;
pub mod lazy_image;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod status_badge;
pub mod typewriter;

pub use carousel::GalleryCarousel;
pub use count_up::CountUpNumber;
pub use footer::Footer;
pub use icon::{Icon, IconKind};
pub use lazy_image::LazyImage;
pub use modal::{CloseButton, Modal};
pub use nav::Navbar;
pub use reveal::RevealOnScroll;
pub use status_badge::StatusBadge;
pub use typewriter::TypewriterText;
