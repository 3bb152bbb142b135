//! Pages
//!
//! One component per route.

pub mod about;
pub mod achievements;
pub mod contact;
pub mod events;
pub mod gallery;
pub mod home;
pub mod team;

pub use about::About;
pub use achievements::Achievements;
pub use contact::Contact;
pub use events::Events;
pub use gallery::Gallery;
pub use home::Home;
pub use team::Team;
