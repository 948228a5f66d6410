//! Formatting helpers for the pending-entry table.
//!
//! Durations are shown as `H:MM:SS` with unbounded hours (`0:45:00`,
//! `12:30:00`), start times as a short weekday/date/time
//! (`Mon 04 Mar 10:00`) in the user's local wall clock.
//!
//! ```rust
//! use tempoggl::libs::formatter::format_duration;
//!
//! assert_eq!(format_duration(5400), "1:30:00");
//! ```

use super::timestamp::SourceTimestamp;

pub const STARTED_FORMAT: &str = "%a %d %b %H:%M";

pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, secs)
}

pub fn format_started(started: &SourceTimestamp) -> String {
    started.local_wall_clock().format(STARTED_FORMAT).to_string()
}
