use super::interpolate::progress;
use std::time::{Duration, Instant};

/// Fixed-period tick schedule for the simulation, independent of how often
/// frames are drawn.  Every method takes the current time explicitly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GridClock {
    period: Duration,
    last_tick: Instant,
}

impl GridClock {
    pub(crate) fn new(period: Duration, now: Instant) -> GridClock {
        GridClock {
            period,
            last_tick: now,
        }
    }

    /// Start a fresh period at `now`
    pub(crate) fn restart(&mut self, now: Instant) {
        self.last_tick = now;
    }

    pub(crate) fn next_tick(&self) -> Instant {
        self.last_tick + self.period
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick()
    }

    /// Record that a tick has fired.  The schedule advances by exactly one
    /// period unless the caller has fallen more than a whole period behind,
    /// in which case it restarts from `now` instead of firing a burst of
    /// catch-up ticks.
    pub(crate) fn tick(&mut self, now: Instant) {
        let scheduled = self.next_tick();
        if now.saturating_duration_since(scheduled) >= self.period {
            self.last_tick = now;
        } else {
            self.last_tick = scheduled;
        }
    }

    /// Fraction of the current period that has elapsed, in `[0, 1]`
    pub(crate) fn progress(&self, now: Instant) -> f64 {
        progress(now.saturating_duration_since(self.last_tick), self.period)
    }
}
