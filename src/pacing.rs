//! Reveal timing for the tips panel. Tips are computed up front; these helpers
//! only describe how the page animates them in.

pub const TICK_MS: u64 = 70;
pub const DEFAULT_STEP: u8 = 6;

const FIRST_REVEAL_MS: u64 = 150;
const REVEAL_GAP_MS: u64 = 180;

/// Progress percentages for the loading bar. Yields 100 exactly once, then stops.
#[derive(Debug, Clone)]
pub struct ProgressTicker {
    step: u8,
    current: u8,
    done: bool,
}

impl ProgressTicker {
    pub fn new(step: u8) -> Self {
        Self {
            step: step.clamp(1, 100),
            current: 0,
            done: false,
        }
    }
}

impl Default for ProgressTicker {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl Iterator for ProgressTicker {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }
        self.current = self.current.saturating_add(self.step).min(100);
        if self.current == 100 {
            self.done = true;
        }
        Some(self.current)
    }
}

/// Delay in milliseconds before each tip is shown, counted from completion.
pub fn reveal_delays(count: usize) -> Vec<u64> {
    (0..count as u64)
        .map(|i| FIRST_REVEAL_MS + i * REVEAL_GAP_MS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_ends_at_one_hundred() {
        let ticks: Vec<u8> = ProgressTicker::new(30).collect();
        assert_eq!(ticks, [30, 60, 90, 100]);
    }

    #[test]
    fn ticker_stops_after_completion() {
        let mut ticker = ProgressTicker::new(100);
        assert_eq!(ticker.next(), Some(100));
        assert_eq!(ticker.next(), None);
        assert_eq!(ticker.next(), None);
    }

    #[test]
    fn zero_step_still_progresses() {
        assert_eq!(ProgressTicker::new(0).count(), 100);
        assert_eq!(ProgressTicker::default().last(), Some(100));
    }

    #[test]
    fn reveal_delays_are_staggered() {
        assert_eq!(reveal_delays(3), [150, 330, 510]);
        assert!(reveal_delays(0).is_empty());
    }
}
