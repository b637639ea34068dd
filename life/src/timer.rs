// timer.rs - Repeating timer owned by the simulation controller

use std::time::{Duration, Instant};

/// A cancellable periodic timer.
///
/// The ticker never fires on its own: the host's scheduler wakes the
/// controller, which asks the ticker whether a period has elapsed. Dropping
/// the ticker cancels it.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self { interval, next_due: now + interval }
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Returns true once per elapsed period. Missed periods are coalesced
    /// into a single firing and the next one is scheduled from `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::start(Duration::from_millis(50), start);

        assert!(!ticker.fire(start));
        assert!(!ticker.fire(start + Duration::from_millis(49)));
        assert!(ticker.fire(start + Duration::from_millis(50)));
        assert!(!ticker.fire(start + Duration::from_millis(60)));
        assert!(ticker.fire(start + Duration::from_millis(100)));
    }

    #[test]
    fn test_missed_periods_coalesce() {
        let start = Instant::now();
        let mut ticker = Ticker::start(Duration::from_millis(50), start);
        let late = start + Duration::from_millis(500);

        assert!(ticker.fire(late));
        assert!(!ticker.fire(late));
        assert_eq!(ticker.next_due(), late + Duration::from_millis(50));
    }
}
