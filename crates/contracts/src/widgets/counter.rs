use serde::{Deserialize, Serialize};

/// A headline number shown in the counter section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterStat {
    pub value: u64,
    pub suffix: String,
    pub label: String,
}

/// Counts from zero up to a target in fixed increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTicker {
    target: u64,
    current: u64,
    increment: u64,
}

impl CounterTicker {
    /// The increment is `ceil(target / steps)`, so the target is reached in at
    /// most `steps` ticks.
    pub fn new(target: u64, steps: u64) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            current: 0,
            increment: target.div_ceil(steps).max(1),
        }
    }

    /// Advances one tick; returns `false` once the target was already reached.
    pub fn tick(&mut self) -> bool {
        if self.current >= self.target {
            return false;
        }
        self.current = (self.current + self.increment).min(self.target);
        true
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn value(&self) -> u64 {
        self.current
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_up_and_clamps() {
        let mut ticker = CounterTicker::new(250, 100);
        assert!(ticker.tick());
        assert_eq!(ticker.value(), 3);

        let mut ticks = 1;
        while ticker.tick() {
            ticks += 1;
        }
        assert_eq!(ticker.value(), 250);
        assert!(ticker.is_finished());
        assert_eq!(ticks, 84);
    }

    #[test]
    fn test_small_targets_step_by_one() {
        let mut ticker = CounterTicker::new(7, 100);
        let mut seen = Vec::new();
        while ticker.tick() {
            seen.push(ticker.value());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_zero_target_is_already_finished() {
        let mut ticker = CounterTicker::new(0, 100);
        assert!(ticker.is_finished());
        assert!(!ticker.tick());
        assert_eq!(ticker.value(), 0);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut ticker = CounterTicker::new(10, 2);
        ticker.tick();
        ticker.tick();
        assert!(ticker.is_finished());
        ticker.reset();
        assert_eq!(ticker.value(), 0);
        assert_eq!(ticker.target(), 10);
    }
}
