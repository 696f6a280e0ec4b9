/// Index of a looping vertical ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCycle {
    index: usize,
    count: usize,
}

impl SlideCycle {
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count: count.max(1),
        }
    }

    /// Moves to the next slide, wrapping after the last one.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Vertical translation of the track, in px (negative = up).
    pub fn offset_px(&self, step_px: u32) -> i64 {
        -(self.index as i64 * i64::from(step_px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_after_last_slide() {
        let mut cycle = SlideCycle::new(3);
        assert_eq!(cycle.advance(), 1);
        assert_eq!(cycle.advance(), 2);
        assert_eq!(cycle.offset_px(100), -200);
        assert_eq!(cycle.advance(), 0);
        assert_eq!(cycle.offset_px(100), 0);
    }

    #[test]
    fn test_single_slide_never_moves() {
        let mut cycle = SlideCycle::new(0);
        assert_eq!(cycle.advance(), 0);
    }
}
