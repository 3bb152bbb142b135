//! Theme context
//!
//! Created once by the app root and read by the header toggle. Every change
//! is mirrored onto the document root class and into local storage.

use cs_branch::theme::{Theme, DARK_CLASS, STORAGE_KEY};
use leptos::*;

use crate::dom;

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }
}

/// Restore the stored theme and provide it as context
pub fn provide_theme_state() {
    let stored = dom::load_setting(STORAGE_KEY);
    let theme = create_rw_signal(Theme::from_stored(stored.as_deref()));

    create_effect(move |_| {
        let current = theme.get();
        dom::set_root_class(DARK_CLASS, current.is_dark());
        dom::save_setting(STORAGE_KEY, current.as_str());
    });

    provide_context(ThemeState { theme });
}
