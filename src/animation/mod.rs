//! Animation state machines
//!
//! Timer- and observer-driven effects reduced to plain state plus a step
//! function. The UI owns the clocks (`setTimeout`, animation frames,
//! `IntersectionObserver`) and feeds their callbacks into these types.

pub mod count_up;
pub mod cycle;
pub mod reveal;
pub mod typewriter;

pub use count_up::{ease_out_expo, CountUp};
pub use cycle::{Cycle, SLIDESHOW_INTERVAL_MS};
pub use reveal::{stagger_delay_ms, HeaderScroll, Reveal};
pub use typewriter::{TypePhase, Typewriter, JITTER_MAX_MS};
