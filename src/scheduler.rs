use std::time::{Duration, Instant};

/// Fixed-period tick timer driven by caller-supplied instants.
///
/// The runtime feeds it `Instant::now()`; tests feed synthetic instants, so
/// no code path ever sleeps inside the simulation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickScheduler {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickScheduler {
    /// Creates a disarmed scheduler.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms the scheduler; the first tick falls due one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Stops scheduling until the next [`start`](Self::start).
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when a tick is due at `now` and re-arms for the next one.
    ///
    /// A late poll yields a single tick; missed periods are not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` while disarmed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
