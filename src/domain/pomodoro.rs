/// Default pomodoro length in seconds (25 minutes)
pub const POMODORO_SECS: u64 = 1500;

/// The fixed-duration pomodoro countdown.
///
/// Process-local, never persisted; re-initialized to its default every time
/// the pomodoro view is entered.
#[derive(Debug, Clone)]
pub struct Pomodoro {
    /// Armed flag for the one-second tick
    pub running: bool,
    /// Seconds left, floored at 0
    pub remaining: u64,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self {
            running: false,
            remaining: POMODORO_SECS,
        }
    }
}

impl Pomodoro {
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop and wind back to the full 25 minutes
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = POMODORO_SECS;
    }

    /// Count down one second while armed; silent stop at zero
    pub fn tick(&mut self) {
        if self.running && self.remaining > 0 {
            self.remaining -= 1;
        }
    }

    /// Format the remaining time as MM:SS
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
