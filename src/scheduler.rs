use std::time::{Duration, Instant};

/// Fixed-interval tick timer for the single-threaded event loop.
///
/// Holds at most one armed deadline. Arming always goes through a full stop
/// first, so a reconfigure can never leave two deadlines live — the contract
/// a port to a threaded timer has to keep.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    interval: Duration,
    next_fire: Option<Instant>,
}

impl TickScheduler {
    /// Creates a disarmed scheduler with the given interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_fire: None,
        }
    }

    /// Arms the timer; an already armed deadline is replaced.
    pub fn start(&mut self, now: Instant) {
        self.stop();
        self.next_fire = Some(now + self.interval);
    }

    /// Disarms the timer. Idempotent.
    pub fn stop(&mut self) {
        self.next_fire = None;
    }

    /// Stops the old deadline, then arms with the new interval.
    ///
    /// The new cadence takes effect from the next fire; the tick that
    /// triggered a speed-up has already fired on the old interval.
    pub fn reconfigure(&mut self, interval: Duration, now: Instant) {
        self.stop();
        self.interval = interval;
        self.start(now);
    }

    /// Reports whether the deadline elapsed, re-arming for the next fire.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_fire {
            Some(deadline) if now >= deadline => {
                self.next_fire = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Returns the currently configured interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true while a deadline is armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }
}
