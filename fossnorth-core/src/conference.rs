//! Conference days and wall-clock handling.
//!
//! foss-north 2025 runs on exactly two days, April 14 and April 15, in
//! Gothenburg (UTC+02:00 at that time of year). Every timestamp the tools
//! produce is anchored to one of those days.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Duration, FixedOffset};
use regex::Regex;
use serde::Deserialize;

use crate::error::{FossNorthError, FossNorthResult};

/// UTC offset of the conference venue, in hours.
pub const UTC_OFFSET_HOURS: i32 = 2;

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d\d:\d\d$").expect("time pattern is a valid regex"));

/// One of the two conference days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum ConferenceDay {
    #[serde(rename = "apr14")]
    Apr14,
    #[serde(rename = "apr15")]
    Apr15,
}

impl ConferenceDay {
    pub const ALL: [ConferenceDay; 2] = [ConferenceDay::Apr14, ConferenceDay::Apr15];

    pub fn from_day_of_month(day: u32) -> FossNorthResult<Self> {
        match day {
            14 => Ok(ConferenceDay::Apr14),
            15 => Ok(ConferenceDay::Apr15),
            other => Err(FossNorthError::InvalidDay(other.to_string())),
        }
    }

    pub fn day_of_month(self) -> u32 {
        match self {
            ConferenceDay::Apr14 => 14,
            ConferenceDay::Apr15 => 15,
        }
    }

    fn iso_date(self) -> &'static str {
        match self {
            ConferenceDay::Apr14 => "2025-04-14",
            ConferenceDay::Apr15 => "2025-04-15",
        }
    }

    /// Build a timestamp on this day from an `hh:mm` string.
    pub fn at(self, time: &str) -> FossNorthResult<DateTime<FixedOffset>> {
        if !TIME_PATTERN.is_match(time) {
            return Err(FossNorthError::InvalidTime(time.to_string()));
        }

        let rfc3339 = format!(
            "{}T{}:00+{:02}:00",
            self.iso_date(),
            time,
            UTC_OFFSET_HOURS
        );
        DateTime::parse_from_rfc3339(&rfc3339)
            .map_err(|_| FossNorthError::InvalidTime(time.to_string()))
    }

    /// Midnight at the start of this day, in conference time.
    pub fn start_of_day(self) -> FossNorthResult<DateTime<FixedOffset>> {
        self.at("00:00")
    }
}

impl FromStr for ConferenceDay {
    type Err = FossNorthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apr14" => Ok(ConferenceDay::Apr14),
            "apr15" => Ok(ConferenceDay::Apr15),
            other => Err(FossNorthError::InvalidDay(other.to_string())),
        }
    }
}

impl fmt::Display for ConferenceDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConferenceDay::Apr14 => write!(f, "apr14"),
            ConferenceDay::Apr15 => write!(f, "apr15"),
        }
    }
}

/// Build a timestamp from a day of the month and an `hh:mm` string.
///
/// Only the 14th and the 15th are accepted.
pub fn date_time(day: u32, time: &str) -> FossNorthResult<DateTime<FixedOffset>> {
    ConferenceDay::from_day_of_month(day)?.at(time)
}

/// The window during which a ticket is valid: from midnight before the first
/// day until midnight after the last one.
pub fn validity_window() -> FossNorthResult<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let from = ConferenceDay::Apr14.start_of_day()?;
    let until = ConferenceDay::Apr15.start_of_day()? + Duration::days(1);
    Ok((from, until))
}

/// A position on the conference clock, counted in half hours since midnight.
///
/// The agenda only ever moves in 30 minute steps, so half hours keep all
/// schedule arithmetic exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfHours(pub i32);

impl HalfHours {
    pub const fn hours(hours: i32) -> Self {
        HalfHours(hours * 2)
    }

    pub const fn hours_and_a_half(hours: i32) -> Self {
        HalfHours(hours * 2 + 1)
    }

    pub const fn plus(self, half_hours: i32) -> Self {
        HalfHours(self.0 + half_hours)
    }

    /// Fractional hours, e.g. `15.5` for half past three.
    pub fn as_hours(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Render as the `hh:mm` string fed to [`ConferenceDay::at`].
    ///
    /// The hour is shifted by [`UTC_OFFSET_HOURS`]: the calendar is written
    /// out as UTC instants whose `Z` is later stripped, so the offset has to
    /// be added here for the final local reading to come out right.
    pub fn to_clock(self) -> String {
        let hour = self.0.div_euclid(2) + UTC_OFFSET_HOURS;
        let minute = if self.0.rem_euclid(2) == 0 { "00" } else { "30" };
        format!("{:0>5}", format!("{hour}:{minute}"))
    }

    pub fn on(self, day: ConferenceDay) -> FossNorthResult<DateTime<FixedOffset>> {
        day.at(&self.to_clock())
    }
}
