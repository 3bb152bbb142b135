//! Wrapping index for slideshows

/// About page hero slide interval
pub const SLIDESHOW_INTERVAL_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    len: usize,
    index: usize,
}

impl Cycle {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next slide, wrapping to 0; no-op when empty
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps() {
        let mut cycle = Cycle::new(4);
        let seen: Vec<usize> = (0..6).map(|_| cycle.advance()).collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1, 2]);
    }

    #[test]
    fn test_empty() {
        let mut cycle = Cycle::new(0);
        assert_eq!(cycle.advance(), 0);
    }
}
