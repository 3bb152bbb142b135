//! Anchor and route-change scrolling
//!
//! Decides where the window should scroll when the route or hash changes and
//! whether a click on a link is a same-page anchor jump. The UI performs the
//! actual `scrollTo` after [`SETTLE_DELAY_MS`] so freshly routed content has
//! been laid out.

use url::Url;

/// Height of the fixed header; anchored sections stop this far below the top
pub const HEADER_OFFSET_PX: f64 = 100.0;

/// Wait before scrolling after a route or hash change
pub const SETTLE_DELAY_MS: u32 = 100;

/// Where to scroll after navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    /// Element id, without the leading `#`
    Element(String),
}

impl ScrollTarget {
    /// Target for a location hash such as `#contact-form`; an empty hash
    /// scrolls to the top
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#') {
            "" => ScrollTarget::Top,
            id => ScrollTarget::Element(id.to_string()),
        }
    }
}

/// Document offset to scroll to so the element sits just under the header.
/// `element_top` is the element's viewport-relative top.
pub fn anchor_offset(element_top: f64, scroll_y: f64) -> f64 {
    (element_top + scroll_y - HEADER_OFFSET_PX).max(0.0)
}

/// What to do with a click on a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorClick {
    /// Not a same-page anchor, or unparseable: let the browser/router have it
    Ignore,
    /// Plain anchor: prevent default, push `hash` to history, scroll to `target`
    Intercept { hash: String, target: String },
    /// Router link already navigated to the current hash; just scroll again
    Rescroll { target: String },
}

/// Classify a click on a link with absolute `href` while the window is at
/// `current`. `default_prevented` is true when the router already handled it.
pub fn classify_anchor_click(href: &str, current: &str, default_prevented: bool) -> AnchorClick {
    let (Ok(link), Ok(here)) = (Url::parse(href), Url::parse(current)) else {
        tracing::debug!(href, "Ignoring click on malformed link");
        return AnchorClick::Ignore;
    };

    let same_page = link.path() == here.path() && link.query() == here.query();
    let fragment = match link.fragment() {
        Some(f) if !f.is_empty() && same_page => f,
        _ => return AnchorClick::Ignore,
    };

    if !default_prevented {
        AnchorClick::Intercept {
            hash: format!("#{fragment}"),
            target: fragment.to_string(),
        }
    } else if here.fragment() == Some(fragment) {
        AnchorClick::Rescroll {
            target: fragment.to_string(),
        }
    } else {
        AnchorClick::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERE: &str = "https://branch.example/contact";

    #[test]
    fn test_scroll_target_from_hash() {
        assert_eq!(ScrollTarget::from_hash(""), ScrollTarget::Top);
        assert_eq!(ScrollTarget::from_hash("#"), ScrollTarget::Top);
        assert_eq!(
            ScrollTarget::from_hash("#contact-form"),
            ScrollTarget::Element("contact-form".to_string())
        );
    }

    #[test]
    fn test_anchor_offset() {
        assert_eq!(anchor_offset(300.0, 500.0), 700.0);
        assert_eq!(anchor_offset(40.0, 0.0), 0.0);
    }

    #[test]
    fn test_same_page_anchor_is_intercepted() {
        assert_eq!(
            classify_anchor_click("https://branch.example/contact#form", HERE, false),
            AnchorClick::Intercept {
                hash: "#form".to_string(),
                target: "form".to_string(),
            }
        );
    }

    #[test]
    fn test_router_link_to_current_hash_rescrolls() {
        let here = "https://branch.example/contact#form";
        assert_eq!(
            classify_anchor_click("https://branch.example/contact#form", here, true),
            AnchorClick::Rescroll {
                target: "form".to_string()
            }
        );
        assert_eq!(
            classify_anchor_click("https://branch.example/contact#map", here, true),
            AnchorClick::Ignore
        );
    }

    #[test]
    fn test_cross_page_and_hashless_ignored() {
        assert_eq!(
            classify_anchor_click("https://branch.example/events#top", HERE, false),
            AnchorClick::Ignore
        );
        assert_eq!(
            classify_anchor_click("https://branch.example/contact?x=1#form", HERE, false),
            AnchorClick::Ignore
        );
        assert_eq!(
            classify_anchor_click("https://branch.example/contact", HERE, false),
            AnchorClick::Ignore
        );
    }

    #[test]
    fn test_malformed_ignored() {
        assert_eq!(classify_anchor_click("not a url", HERE, false), AnchorClick::Ignore);
        assert_eq!(classify_anchor_click("#form", "garbage", false), AnchorClick::Ignore);
    }
}
