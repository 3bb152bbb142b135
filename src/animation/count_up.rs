//! Numeric count-up

/// Default animation length
pub const DEFAULT_DURATION_MS: f64 = 1000.0;

/// Exponential ease-out: fast start, long settle, exactly 1 at the end
pub fn ease_out_expo(x: f64) -> f64 {
    if x >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * x.max(0.0))
    }
}

/// Count from 0 to `end` over `duration_ms`, driven by animation frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub end: u32,
    pub duration_ms: f64,
}

impl CountUp {
    pub fn new(end: u32) -> Self {
        Self {
            end,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value `elapsed_ms` after the first frame
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if self.is_finished(elapsed_ms) {
            return self.end;
        }
        (ease_out_expo(self.progress(elapsed_ms)) * self.end as f64).floor() as u32
    }

    /// Whether no further frame is needed
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(ease_out_expo(0.5) > 0.96);
    }

    #[test]
    fn test_count_to_forty_is_monotonic_and_exact() {
        let counter = CountUp::new(40);
        assert_eq!(counter.value_at(0.0), 0);

        let mut last = 0;
        let mut elapsed = 0.0;
        while !counter.is_finished(elapsed) {
            let value = counter.value_at(elapsed);
            assert!(value >= last, "{value} < {last} at {elapsed}ms");
            assert!(value <= 40);
            last = value;
            elapsed += 16.7;
        }
        assert_eq!(counter.value_at(elapsed), 40);
        assert_eq!(counter.value_at(5000.0), 40);
    }

    #[test]
    fn test_floors_intermediate_values() {
        let counter = CountUp::new(10);
        // 1 - 2^-1 = 0.5 at 100ms
        assert_eq!(counter.value_at(100.0), 5);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let counter = CountUp::new(30).with_duration(0.0);
        assert_eq!(counter.value_at(0.0), 30);
    }
}
