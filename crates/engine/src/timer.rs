//! Host-side periodic tick source.
//!
//! Stands in for the hardware match timers: the producer thread polls these
//! and raises the corresponding flag on expiry. A poll that arrives several
//! periods late fires once and reschedules from now - missed periods coalesce,
//! matching the flag semantics downstream.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    period: Duration,
    next: Instant,
}

impl PeriodicTimer {
    pub fn new(period_ms: u64) -> Self {
        let period = Duration::from_millis(period_ms);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// True at most once per elapsed period.
    pub fn poll(&mut self) -> bool {
        let now = Instant::now();
        if now >= self.next {
            self.next = now + self.period;
            true
        } else {
            false
        }
    }

    /// Change the period; takes effect from the next expiry. Used for the
    /// gravity timer as the level rises.
    pub fn set_period_ms(&mut self, period_ms: u64) {
        let period = Duration::from_millis(period_ms);
        if period != self.period {
            self.period = period;
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period.as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_does_not_fire_early() {
        let mut timer = PeriodicTimer::new(10_000);
        assert!(!timer.poll());
        assert!(!timer.poll());
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut timer = PeriodicTimer::new(1);
        std::thread::sleep(Duration::from_millis(5));
        // Late by several periods: exactly one fire, then rescheduled.
        assert!(timer.poll());
        assert!(!timer.poll());
    }

    #[test]
    fn test_set_period() {
        let mut timer = PeriodicTimer::new(1000);
        timer.set_period_ms(100);
        assert_eq!(timer.period_ms(), 100);
    }
}
