/// Direction the scroll-driven marquee plays in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeDirection {
    Forward,
    Backward,
}

impl MarqueeDirection {
    /// GSAP time scale for this direction.
    pub fn time_scale(&self) -> f64 {
        match self {
            MarqueeDirection::Forward => 1.0,
            MarqueeDirection::Backward => -1.0,
        }
    }
}

/// Remembers the last significant scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTracker {
    last_y: f64,
}

impl ScrollTracker {
    /// Movements of at most this many px are ignored.
    pub const THRESHOLD_PX: f64 = 1.0;

    pub fn new(initial_y: f64) -> Self {
        Self { last_y: initial_y }
    }

    /// Returns the new direction when the page moved far enough; the position
    /// is only remembered in that case.
    pub fn observe(&mut self, y: f64) -> Option<MarqueeDirection> {
        if (y - self.last_y).abs() <= Self::THRESHOLD_PX {
            return None;
        }
        let direction = if y > self.last_y {
            MarqueeDirection::Forward
        } else {
            MarqueeDirection::Backward
        };
        self.last_y = y;
        Some(direction)
    }
}

/// Offsets for content rendered three times: the tween runs to `-2w` and
/// snaps back to `-w` on every repeat.
pub fn loop_offsets(total_width: f64) -> (f64, f64) {
    let single = total_width / 3.0;
    (-2.0 * single, -single)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_follows_scroll() {
        let mut tracker = ScrollTracker::new(0.0);
        assert_eq!(tracker.observe(50.0), Some(MarqueeDirection::Forward));
        assert_eq!(tracker.observe(20.0), Some(MarqueeDirection::Backward));
        assert_eq!(MarqueeDirection::Backward.time_scale(), -1.0);
    }

    #[test]
    fn test_jitter_is_ignored() {
        let mut tracker = ScrollTracker::new(100.0);
        assert_eq!(tracker.observe(101.0), None);
        assert_eq!(tracker.observe(99.5), None);
        // Small moves do not accumulate into the baseline.
        assert_eq!(tracker.observe(102.5), Some(MarqueeDirection::Forward));
    }

    #[test]
    fn test_loop_offsets() {
        assert_eq!(loop_offsets(900.0), (-600.0, -300.0));
    }
}
