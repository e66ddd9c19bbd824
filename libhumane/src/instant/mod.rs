//! Points in time as accepted by the date formatters.
//!
//! Callers may hand over a raw epoch timestamp, a date string, or a chrono
//! date-time. Each variant is normalized to epoch seconds at the boundary so
//! the formatting code only ever deals with one representation.

use crate::error::{HumaneError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use tracing::{debug, warn};


/// Date-time layouts tried, in order, for naive date text.
const DATETIME_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Date-only layouts tried, in order, for naive date text. Midnight is assumed.
const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%d %B %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%Y/%m/%d",
];

/// A point in time in any of the forms the formatters accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instant {
    /// Seconds since the Unix epoch.
    EpochSeconds(i64),
    /// A date string such as `"2020-01-05"` or `"2020-01-05T10:00:00+02:00"`.
    DateText(String),
    /// A date-time value carrying its own offset.
    NativeDate(DateTime<FixedOffset>),
}

impl Instant {
    /// Normalizes this instant to seconds since the Unix epoch.
    ///
    /// Date text without an explicit offset is read as wall-clock time in
    /// `tz`. Text that matches no known layout, or a wall-clock time that does
    /// not exist in `tz`, fails with [`HumaneError::InvalidInstant`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use libhumane::Instant;
    ///
    /// let text = Instant::from("1970-01-02");
    /// assert_eq!(text.to_epoch_seconds(&Utc).unwrap(), 86400);
    /// assert_eq!(Instant::from(86400).to_epoch_seconds(&Utc).unwrap(), 86400);
    /// assert!(Instant::from("not a date").to_epoch_seconds(&Utc).is_err());
    /// ```
    pub fn to_epoch_seconds<Tz: TimeZone>(&self, tz: &Tz) -> Result<i64> {
        match self {
            Instant::EpochSeconds(seconds) => Ok(*seconds),
            Instant::NativeDate(date) => Ok(date.timestamp()),
            Instant::DateText(text) => parse_date_text(text, tz),
        }
    }
}

impl From<i64> for Instant {
    fn from(seconds: i64) -> Self {
        Instant::EpochSeconds(seconds)
    }
}

impl From<&str> for Instant {
    fn from(text: &str) -> Self {
        Instant::DateText(text.to_string())
    }
}

impl From<String> for Instant {
    fn from(text: String) -> Self {
        Instant::DateText(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(date: DateTime<Tz>) -> Self {
        Instant::NativeDate(date.fixed_offset())
    }
}

fn parse_date_text<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        warn!("rejected empty date text");
        return Err(HumaneError::invalid_instant(text, "empty date text"));
    }

    let numeric = trimmed.strip_prefix('@').unwrap_or(trimmed);
    if let Ok(seconds) = numeric.parse::<i64>() {
        debug!(input = trimmed, "parsed date text as epoch seconds");
        return Ok(seconds);
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        debug!(input = trimmed, layout = "rfc3339", "parsed date text");
        return Ok(date.timestamp());
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(trimmed) {
        debug!(input = trimmed, layout = "rfc2822", "parsed date text");
        return Ok(date.timestamp());
    }

    let naive = DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| {
            NaiveDateTime::parse_from_str(trimmed, layout)
                .ok()
                .map(|naive| (*layout, naive))
        })
        .or_else(|| {
            DATE_LAYOUTS.iter().find_map(|layout| {
                NaiveDate::parse_from_str(trimmed, layout)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|naive| (*layout, naive))
            })
        });

    let Some((layout, naive)) = naive else {
        warn!(input = trimmed, "rejected date text");
        return Err(HumaneError::invalid_instant(
            text,
            "no known date layout matched",
        ));
    };

    debug!(input = trimmed, layout, "parsed date text");
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|date| date.timestamp())
        .ok_or_else(|| {
            warn!(input = trimmed, "local time does not exist in timezone");
            HumaneError::invalid_instant(text, "local time does not exist in timezone")
        })
}
