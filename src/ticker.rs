use std::time::{Duration, Instant};

/// Event-loop poll interval in milliseconds
pub const POLL_MS: u64 = 250;

/// Period of the shared one-second timer tick
pub const SECOND: Duration = Duration::from_secs(1);

/// Period of the daily countdown refresh
pub const MINUTE: Duration = Duration::from_secs(60);

/// Get the event-loop poll duration
pub fn poll_duration() -> Duration {
    Duration::from_millis(POLL_MS)
}

/// A self-rearming interval polled from the single-threaded event loop.
///
/// `poll` reports at most one firing per call and re-arms relative to the
/// observed instant, so a stalled loop catches up one tick per iteration
/// instead of bursting. Whether a firing has any effect is decided by the
/// owner's armed flag (`Task::running`, `Pomodoro::running`) inside the
/// tick, never at schedule time.
#[derive(Debug)]
pub struct Interval {
    period: Duration,
    next_due: Instant,
}

impl Interval {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Check whether the interval has come due; re-arms on firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }
}
