use std::time::{Duration, Instant};

/// Decides when gravity moves the falling piece down one row.
#[derive(Debug, Clone)]
pub(crate) struct DropClock {
    interval: Duration,
    soft_drop_interval: Duration,
    soft_drop: bool,
    last_drop: Instant,
}

impl DropClock {
    pub(crate) fn new(interval: Duration, soft_drop_interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            soft_drop_interval,
            soft_drop: false,
            last_drop: now,
        }
    }

    /// Interval currently in effect.
    pub(crate) fn interval(&self) -> Duration {
        if self.soft_drop {
            self.soft_drop_interval
        } else {
            self.interval
        }
    }

    pub(crate) fn set_soft_drop(&mut self, soft_drop: bool) {
        self.soft_drop = soft_drop;
    }

    /// Counts the next interval from `now`.
    pub(crate) fn restart(&mut self, now: Instant) {
        self.last_drop = now;
    }

    /// Returns `true` (and restarts) once strictly more than the interval
    /// has elapsed since the last drop.
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_drop) > self.interval() {
            self.last_drop = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn clock(t0: Instant) -> DropClock {
        DropClock::new(500 * MS, 50 * MS, t0)
    }

    #[test]
    fn test_fires_after_interval() {
        let t0 = Instant::now();
        let mut clock = clock(t0);
        assert!(!clock.poll(t0 + 499 * MS));
        assert!(!clock.poll(t0 + 500 * MS), "exactly the interval does not fire");
        assert!(clock.poll(t0 + 501 * MS));
        assert!(!clock.poll(t0 + 502 * MS));
        assert!(clock.poll(t0 + 1002 * MS));
    }

    #[test]
    fn test_soft_drop_shortens_interval() {
        let t0 = Instant::now();
        let mut clock = clock(t0);
        clock.set_soft_drop(true);
        assert_eq!(clock.interval(), 50 * MS);
        assert!(clock.poll(t0 + 51 * MS));
        assert!(clock.poll(t0 + 102 * MS));

        clock.set_soft_drop(false);
        assert_eq!(clock.interval(), 500 * MS);
        assert!(!clock.poll(t0 + 153 * MS));
        assert!(clock.poll(t0 + 603 * MS));
    }

    #[test]
    fn test_restart_postpones_next_drop() {
        let t0 = Instant::now();
        let mut clock = clock(t0);
        clock.restart(t0 + 400 * MS);
        assert!(!clock.poll(t0 + 600 * MS));
        assert!(clock.poll(t0 + 901 * MS));
    }
}
