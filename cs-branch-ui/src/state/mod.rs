//! State Management
//!
//! Context objects shared across the component tree.

pub mod theme;

pub use theme::{provide_theme_state, ThemeState};
