pub mod enums;
pub mod pomodoro;
pub mod task;
pub mod zones;

pub use enums::{UiMode, View};
pub use pomodoro::{Pomodoro, POMODORO_SECS};
pub use task::{format_elapsed, Task};
pub use zones::{zone, zone_label, DEFAULT_ZONE, ZONES};
