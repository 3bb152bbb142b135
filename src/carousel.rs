//! Gallery carousel positioner
//!
//! The UI reads the strip geometry out of the DOM into [`StripMetrics`] and
//! asks this module which card is centered and where to scroll next. All
//! coordinates are CSS pixels in the strip's content space, i.e. a card's
//! `left` is its `offsetLeft` and the visible window starts at `scroll_left`.

/// Scroll offsets closer than this to either end snap to the first/last card
pub const EDGE_TOLERANCE_PX: f64 = 20.0;

/// Delay between unattended advances
pub const AUTO_ADVANCE_INTERVAL_MS: u32 = 4000;

/// Horizontal extent of one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSpan {
    pub left: f64,
    pub width: f64,
}

impl CardSpan {
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Button navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Snapshot of a scrollable card strip
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StripMetrics {
    pub scroll_left: f64,
    pub viewport_width: f64,
    pub scroll_width: f64,
    pub cards: Vec<CardSpan>,
}

impl StripMetrics {
    /// Strip of `count` equal cards separated by `gap`, with `padding` on both
    /// ends, scrolled to the start
    pub fn uniform(count: usize, card_width: f64, gap: f64, padding: f64, viewport_width: f64) -> Self {
        let cards: Vec<CardSpan> = (0..count)
            .map(|i| CardSpan {
                left: padding + i as f64 * (card_width + gap),
                width: card_width,
            })
            .collect();
        let content = match count {
            0 => 0.0,
            n => n as f64 * card_width + (n - 1) as f64 * gap,
        };

        Self {
            scroll_left: 0.0,
            viewport_width,
            scroll_width: (content + 2.0 * padding).max(viewport_width),
            cards,
        }
    }

    /// Same strip scrolled to `offset`
    pub fn scrolled_to(&self, offset: f64) -> Self {
        Self {
            scroll_left: offset,
            ..self.clone()
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Largest reachable scroll offset
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.viewport_width).max(0.0)
    }

    /// Clamp an index request into `[0, len - 1]`; `None` for an empty strip
    pub fn clamp_index(&self, index: isize) -> Option<usize> {
        let last = self.len().checked_sub(1)?;
        Some(index.clamp(0, last as isize) as usize)
    }

    /// Scroll offset that centers the card at `index` (after clamping)
    pub fn offset_for(&self, index: isize) -> Option<f64> {
        let card = self.cards[self.clamp_index(index)?];
        let raw = card.left - self.viewport_width / 2.0 + card.width / 2.0;
        Some(raw.clamp(0.0, self.max_scroll()))
    }

    /// Index of the card whose midpoint is nearest the viewport midpoint
    pub fn centered_index(&self) -> usize {
        if self.is_empty() || self.scroll_left < EDGE_TOLERANCE_PX {
            return 0;
        }
        if self.scroll_left + self.viewport_width >= self.scroll_width - EDGE_TOLERANCE_PX {
            return self.len() - 1;
        }

        let viewport_center = self.scroll_left + self.viewport_width / 2.0;
        self.cards
            .iter()
            .enumerate()
            .fold((0, f64::MAX), |best, (i, card)| {
                let distance = (viewport_center - card.center()).abs();
                if distance < best.1 {
                    (i, distance)
                } else {
                    best
                }
            })
            .0
    }

    /// Target offset for a previous/next button press
    pub fn step(&self, direction: Direction) -> Option<f64> {
        let current = self.centered_index() as isize;
        let target = match direction {
            Direction::Previous => current - 1,
            Direction::Next => current + 1,
        };
        self.offset_for(target)
    }

    /// Index and offset for the next auto-advance tick, wrapping to the start
    pub fn advance_target(&self) -> Option<(usize, f64)> {
        if self.is_empty() {
            return None;
        }
        let next = (self.centered_index() + 1) % self.len();
        Some((next, self.offset_for(next as isize)?))
    }
}

/// Pause state for auto-advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoAdvance {
    hovered: bool,
    touching: bool,
}

impl AutoAdvance {
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn touch_start(&mut self) {
        self.touching = true;
    }

    pub fn touch_end(&mut self) {
        self.touching = false;
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.touching
    }

    /// Whether a timer tick should move the strip
    pub fn should_advance(&self, item_count: usize) -> bool {
        !self.is_paused() && item_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 6 cards of 400px with 24px gaps and 32px padding in a 600px viewport:
    // scroll width 2584, max scroll 1984.
    fn strip() -> StripMetrics {
        StripMetrics::uniform(6, 400.0, 24.0, 32.0, 600.0)
    }

    #[test]
    fn test_uniform_geometry() {
        let strip = strip();
        assert_eq!(strip.scroll_width, 2584.0);
        assert_eq!(strip.max_scroll(), 1984.0);
        assert_eq!(strip.cards[2].left, 880.0);
    }

    #[test]
    fn test_scroll_to_index_round_trip() {
        let strip = strip();
        for i in 0..strip.len() {
            let offset = strip.offset_for(i as isize).unwrap();
            assert_eq!(strip.scrolled_to(offset).centered_index(), i, "card {i}");
        }
    }

    #[test]
    fn test_offsets_are_clamped() {
        let strip = strip();
        assert_eq!(strip.offset_for(0), Some(0.0));
        assert_eq!(strip.offset_for(5), Some(1984.0));
        assert_eq!(strip.offset_for(-3), strip.offset_for(0));
        assert_eq!(strip.offset_for(42), strip.offset_for(5));
    }

    #[test]
    fn test_edge_guards() {
        let strip = strip();
        assert_eq!(strip.scrolled_to(19.0).centered_index(), 0);
        assert_eq!(strip.scrolled_to(1970.0).centered_index(), 5);
    }

    #[test]
    fn test_nearest_midpoint_wins() {
        let strip = strip();
        // Viewport center at 1100: card 2 center is 1080, card 3 is 1504
        assert_eq!(strip.scrolled_to(800.0).centered_index(), 2);
    }

    #[test]
    fn test_step_buttons() {
        let strip = strip();
        let at_two = strip.scrolled_to(strip.offset_for(2).unwrap());

        assert_eq!(at_two.step(Direction::Next), strip.offset_for(3));
        assert_eq!(at_two.step(Direction::Previous), strip.offset_for(1));
        // Previous from the first card stays on the first card
        assert_eq!(strip.step(Direction::Previous), Some(0.0));
    }

    #[test]
    fn test_auto_advance_wraps() {
        let strip = strip();
        let at_end = strip.scrolled_to(strip.max_scroll());
        assert_eq!(at_end.centered_index(), 5);
        assert_eq!(at_end.advance_target(), Some((0, 0.0)));

        let (next, offset) = strip.advance_target().unwrap();
        assert_eq!(next, 1);
        assert_eq!(strip.scrolled_to(offset).centered_index(), 1);
    }

    #[test]
    fn test_empty_strip() {
        let strip = StripMetrics::uniform(0, 400.0, 24.0, 32.0, 600.0);
        assert!(strip.is_empty());
        assert_eq!(strip.clamp_index(0), None);
        assert_eq!(strip.offset_for(0), None);
        assert_eq!(strip.step(Direction::Next), None);
        assert_eq!(strip.advance_target(), None);
        assert_eq!(strip.centered_index(), 0);
    }

    #[test]
    fn test_pause_state() {
        let mut auto = AutoAdvance::default();
        assert!(auto.should_advance(3));
        assert!(!auto.should_advance(0));

        auto.pointer_enter();
        auto.touch_start();
        auto.pointer_leave();
        assert!(auto.is_paused());

        auto.touch_end();
        assert!(auto.should_advance(3));
    }
}
