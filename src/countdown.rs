use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

/// Outcome of a daily countdown refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayTick {
    /// Time left before end-of-day in the selected zone
    Remaining(Duration),
    /// End-of-day reached; the caller snapshots totals into history
    Rollover,
}

/// Time left until end-of-day (23:59:59) in the given zone.
pub fn remaining_today(zone: Tz, now: DateTime<Utc>) -> Duration {
    let now_local = now.with_timezone(&zone);
    let end_of_day = now_local
        .date_naive()
        .and_hms_opt(23, 59, 59)
        .and_then(|naive| naive.and_local_timezone(zone).earliest());

    match end_of_day {
        Some(end) => end.signed_duration_since(now_local),
        None => Duration::zero(),
    }
}

/// Classify the current instant for the 60-second countdown refresh
pub fn check_day(zone: Tz, now: DateTime<Utc>) -> DayTick {
    let remaining = remaining_today(zone, now);
    if remaining <= Duration::zero() {
        DayTick::Rollover
    } else {
        DayTick::Remaining(remaining)
    }
}

/// Format a remaining duration as whole hours and minutes, e.g. "3h 42m"
pub fn format_remaining(remaining: Duration) -> String {
    let total_minutes = remaining.num_minutes().max(0);
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}
