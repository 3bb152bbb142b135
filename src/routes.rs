//! Client-side routes

use std::fmt;

/// A page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Events,
    Team,
    Achievements,
    Gallery,
    Contact,
}

impl Page {
    pub const ALL: &'static [Page] = &[
        Page::Home,
        Page::About,
        Page::Events,
        Page::Team,
        Page::Achievements,
        Page::Gallery,
        Page::Contact,
    ];

    /// Header navigation, in order. Achievements is linked from Home only.
    pub const NAV: &'static [Page] = &[
        Page::Home,
        Page::About,
        Page::Events,
        Page::Team,
        Page::Gallery,
        Page::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Events => "/events",
            Page::Team => "/team",
            Page::Achievements => "/achievements",
            Page::Gallery => "/gallery",
            Page::Contact => "/contact",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::Events => "Events",
            Page::Team => "Team",
            Page::Achievements => "Achievements",
            Page::Gallery => "Gallery",
            Page::Contact => "Contact",
        }
    }

    /// Exact path match; a single trailing slash is tolerated
    pub fn from_path(path: &str) -> Option<Page> {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Page::ALL.iter().copied().find(|page| page.path() == path)
    }

    /// Pages whose hero sits under a transparent header until scrolled
    pub fn has_transparent_header(&self) -> bool {
        matches!(self, Page::Home | Page::About | Page::Achievements)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nav_label())
    }
}

/// Whether the header should be transparent at `path` for the given scroll state
pub fn header_is_transparent(path: &str, scrolled: bool) -> bool {
    !scrolled && Page::from_path(path).is_some_and(|p| p.has_transparent_header())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(*page));
        }
        assert_eq!(Page::from_path("/team/"), Some(Page::Team));
        assert_eq!(Page::from_path("/nope"), None);
        assert_eq!(Page::from_path("/events/1"), None);
    }

    #[test]
    fn test_nav_excludes_achievements() {
        let labels: Vec<&str> = Page::NAV.iter().map(|p| p.nav_label()).collect();
        assert_eq!(labels, vec!["Home", "About Us", "Events", "Team", "Gallery", "Contact"]);
    }

    #[test]
    fn test_transparent_header() {
        assert!(header_is_transparent("/", false));
        assert!(header_is_transparent("/about", false));
        assert!(!header_is_transparent("/about", true));
        assert!(!header_is_transparent("/events", false));
        assert!(!header_is_transparent("/missing", false));
    }
}
