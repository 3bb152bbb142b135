//! Hero typewriter
//!
//! Types a word one character per tick, holds it, deletes it, then moves on
//! to the next word, forever. The caller owns the timer: after every tick it
//! schedules the next one `delay_ms(jitter)` later, with `jitter` drawn
//! uniformly from `[0, JITTER_MAX_MS)`.

/// Upper bound (exclusive) of the random per-step jitter
pub const JITTER_MAX_MS: u32 = 350;

const TYPE_STEP_MS: u32 = 150;
const LAST_TYPE_STEP_MS: u32 = 1000;
const HOLD_MS: u32 = 2000;
const DELETE_STEP_MS: u32 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePhase {
    Typing,
    /// Word complete, waiting before deletion starts
    Holding,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter<'w> {
    words: &'w [&'w str],
    word: usize,
    shown: usize,
    phase: TypePhase,
}

impl<'w> Typewriter<'w> {
    pub fn new(words: &'w [&'w str]) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            phase: TypePhase::Typing,
        }
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    fn current(&self) -> &'w str {
        self.words.get(self.word).copied().unwrap_or("")
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    /// Visible prefix of the current word
    pub fn text(&self) -> &'w str {
        let word = self.current();
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    /// Delay before the next tick
    pub fn delay_ms(&self, jitter_ms: u32) -> u32 {
        match self.phase {
            TypePhase::Typing if self.shown == self.current_len() => LAST_TYPE_STEP_MS.max(jitter_ms),
            TypePhase::Typing => TYPE_STEP_MS.max(jitter_ms),
            TypePhase::Holding => HOLD_MS,
            TypePhase::Deleting => DELETE_STEP_MS.max(jitter_ms),
        }
    }

    pub fn tick(&mut self) {
        if self.words.is_empty() {
            return;
        }
        match self.phase {
            TypePhase::Typing => {
                self.shown += 1;
                if self.shown > self.current_len() {
                    self.phase = TypePhase::Holding;
                }
            }
            TypePhase::Holding => self.phase = TypePhase::Deleting,
            TypePhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = TypePhase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["Innovators", "Problem Solvers", "Future Leaders", "Developers"];

    #[test]
    fn test_types_holds_and_deletes() {
        let mut tw = Typewriter::new(&["abc"]);
        let mut seen = vec![tw.text()];
        while tw.phase() == TypePhase::Typing {
            tw.tick();
            seen.push(tw.text());
        }
        assert_eq!(seen, vec!["", "a", "ab", "abc", "abc"]);
        assert_eq!(tw.delay_ms(0), 2000);

        tw.tick();
        assert_eq!(tw.phase(), TypePhase::Deleting);
        while tw.phase() == TypePhase::Deleting {
            tw.tick();
        }
        assert_eq!(tw.text(), "");
        assert_eq!(tw.word_index(), 0);
    }

    #[test]
    fn test_visits_every_word_in_order() {
        let mut tw = Typewriter::new(WORDS);
        let mut order = vec![tw.word_index()];
        for _ in 0..500 {
            tw.tick();
            let word = WORDS[tw.word_index()];
            assert!(word.starts_with(tw.text()));
            assert!(tw.text().len() <= word.len());
            if *order.last().unwrap() != tw.word_index() {
                order.push(tw.word_index());
            }
        }
        assert!(order.len() > WORDS.len());
        for (i, word) in order.iter().enumerate() {
            assert_eq!(*word, i % WORDS.len());
        }
    }

    #[test]
    fn test_delays() {
        let mut tw = Typewriter::new(&["ab"]);
        assert_eq!(tw.delay_ms(0), 150);
        assert_eq!(tw.delay_ms(349), 349);
        tw.tick();
        tw.tick();
        assert_eq!(tw.delay_ms(10), 1000);
        tw.tick();
        tw.tick();
        assert_eq!(tw.phase(), TypePhase::Deleting);
        assert_eq!(tw.delay_ms(0), 75);
        assert_eq!(tw.delay_ms(200), 200);
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut tw = Typewriter::new(&["né"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "né");
    }

    #[test]
    fn test_no_words() {
        let mut tw = Typewriter::new(&[]);
        tw.tick();
        assert_eq!(tw.text(), "");
    }
}
