//! Visibility and scroll-position state

/// Intersection ratio at which a fade-in element counts as visible
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Lazy images start loading this far outside the viewport
pub const LAZY_IMAGE_ROOT_MARGIN: &str = "100px";

pub const LAZY_IMAGE_THRESHOLD: f64 = 0.01;

/// Scroll distance after which the header turns solid
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// One-shot visibility latch
///
/// Starts `Pending` and moves to `Revealed` on the first intersecting
/// observation. There is no way back: later observations, intersecting or
/// not, are ignored, so the observer can be disconnected as soon as
/// [`Reveal::observe`] reports the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Pending,
    Revealed,
}

impl Reveal {
    /// Feed one observation; returns `true` only on the transition
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match self {
            Reveal::Pending if intersecting => {
                *self = Reveal::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, Reveal::Revealed)
    }
}

/// Transition delay for the `index`-th item of a staggered list
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

/// Header style driven by the window scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderScroll {
    #[default]
    Top,
    Scrolled,
}

impl HeaderScroll {
    pub fn from_scroll_y(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD_PX {
            HeaderScroll::Scrolled
        } else {
            HeaderScroll::Top
        }
    }

    /// Update from a scroll event; returns `true` when the state flipped
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let next = Self::from_scroll_y(scroll_y);
        let changed = next != *self;
        *self = next;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        matches!(self, HeaderScroll::Scrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_once() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(false));
        assert!(!reveal.is_revealed());

        let fired: Vec<bool> = [true, false, true, true]
            .into_iter()
            .map(|hit| reveal.observe(hit))
            .collect();
        assert_eq!(fired, vec![true, false, false, false]);
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_delay_ms(0, 150), 0);
        assert_eq!(stagger_delay_ms(2, 150), 300);
    }

    #[test]
    fn test_header_threshold() {
        let mut header = HeaderScroll::default();
        assert!(!header.update(20.0));
        assert!(header.update(21.0));
        assert!(header.is_scrolled());
        assert!(!header.update(400.0));
        assert!(header.update(0.0));
        assert_eq!(header, HeaderScroll::Top);
    }
}
