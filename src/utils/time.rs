//! Time utilities: clock and elapsed time rendering.

use chrono::{Duration, NaiveDateTime};

pub fn format_clock(t: &NaiveDateTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Live clock line, e.g. `2024-01-01  09:00:00`.
pub fn format_now(t: &NaiveDateTime) -> String {
    t.format("%Y-%m-%d  %H:%M:%S").to_string()
}

/// Elapsed time as `HH:MM:SS`; hours may exceed 24.
pub fn format_elapsed(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
