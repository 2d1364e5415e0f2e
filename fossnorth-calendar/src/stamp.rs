//! DTSTAMP handling.
//!
//! Every VEVENT needs a creation stamp. Using the wall clock directly would
//! change the output on every run, so the stamp is pinned to 16:00 of the
//! current day unless one is passed in.

use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Today at 16:00:00 in the zone of `now`.
pub fn default_stamp<Tz: TimeZone>(now: DateTime<Tz>) -> DateTime<Utc> {
    now.with_hour(16)
        .and_then(|t| t.with_minute(0))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
        .with_timezone(&Utc)
}

/// Parse a `--stamp` argument (RFC 3339).
pub fn parse_stamp(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid stamp '{}': {}. Expected RFC 3339, e.g. 2025-04-01T16:00:00+02:00", s, e))
}
