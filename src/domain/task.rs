use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// A tracked task.
///
/// The wire format is exactly `{title, done, elapsed, running}`; the id is
/// in-memory only and regenerated on every load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip, default = "new_id")]
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Completion checkbox, independent of the timer
    pub done: bool,
    /// Accumulated seconds
    pub elapsed: u64,
    /// Armed flag for the one-second tick
    pub running: bool,
}

impl Task {
    pub fn new(title: String) -> Self {
        Self {
            id: new_id(),
            title,
            done: false,
            elapsed: 0,
            running: false,
        }
    }

    /// Toggle between running and paused
    pub fn toggle_run(&mut self) {
        self.running = !self.running;
    }

    /// Flip the done checkbox; does not touch the timer
    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    /// Clear the accumulator and pause
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.running = false;
    }

    /// Advance by one second if the timer is armed.
    /// Returns whether the task actually advanced.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed += 1;
            true
        } else {
            false
        }
    }
}

/// Format a second count as "Xh Ym Zs" (omits leading zero components)
pub fn format_elapsed(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
