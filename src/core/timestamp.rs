//! Timestamp formatting for console lines
//!
//! Every line starts with `YYYY-MM-DD HH:MM:SS.mmm`: 23 bytes, milliseconds
//! zero-padded and sub-millisecond digits dropped.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// strftime layout of the console timestamp
pub const CONSOLE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format a timestamp in whatever zone `datetime` carries.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(ultralog::format_console_timestamp(&ts), "2024-01-01 00:00:00.000");
/// ```
#[must_use]
pub fn format_console_timestamp<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    datetime.format(CONSOLE_TIMESTAMP_FORMAT).to_string()
}
