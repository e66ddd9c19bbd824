//! Token-based date formatting.
//!
//! A small format mini-language where each letter stands for one date
//! component, e.g. `"jS F Y"` renders as `"5th January 2020"`. Any character
//! that is not a token is copied through; a backslash copies the following
//! character literally.
//!
//! | Token | Output |
//! |-------|--------|
//! | `d` / `j` | day of month, padded / unpadded |
//! | `S` | English ordinal suffix for the day (`st`, `nd`, `rd`, `th`) |
//! | `D` / `l` | weekday, short / full |
//! | `N` / `w` | ISO weekday 1-7 (Monday first) / 0-6 (Sunday first) |
//! | `z` | day of the year, from 0 |
//! | `F` / `M` | month name, full / short |
//! | `m` / `n` | month number, padded / unpadded |
//! | `t` / `L` | days in the month / leap year flag |
//! | `Y` / `y` | year, four / two digits |
//! | `a` / `A` | `am`/`pm`, lower / upper case |
//! | `g` / `G` / `h` / `H` | hour: 12h, 24h, 12h padded, 24h padded |
//! | `i` / `s` | minutes / seconds, padded |
//! | `U` | seconds since the epoch |
//! | `c` / `r` | ISO 8601 / RFC 2822 |
//! | `e` / `T` / `O` / `P` | zone name / zone abbreviation / offset / offset with colon |

use crate::error::{HumaneError, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike};
use std::fmt::Display;

#[cfg(test)]
mod tests;

/// Absolute date layout used when a date is too old (or too new) for a
/// relative phrase.
pub const DEFAULT_UNFRIENDLY_FORMAT: &str = "j F Y";

/// Layout of ISO 8601 renderings (`2020-01-05T10:00:00+00:00`).
pub const ISO8601: &str = "c";

/// Returns the English ordinal suffix for a day of the month.
///
/// # Examples
///
/// ```
/// use libhumane::datefmt::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1), "st");
/// assert_eq!(ordinal_suffix(12), "th");
/// assert_eq!(ordinal_suffix(22), "nd");
/// ```
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Formats a date-time using the token mini-language.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libhumane::datefmt::format_date;
///
/// let date = Utc.with_ymd_and_hms(2020, 1, 5, 9, 30, 0).unwrap();
/// assert_eq!(format_date(&date, "jS F Y"), "5th January 2020");
/// assert_eq!(format_date(&date, "D, d M y H:i"), "Sun, 05 Jan 20 09:30");
/// ```
pub fn format_date<Tz>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();

    while let Some(token) = chars.next() {
        match token {
            '\\' => {
                if let Some(literal) = chars.next() {
                    out.push(literal);
                }
            }
            'd' => out.push_str(&format!("{:02}", date.day())),
            'j' => out.push_str(&date.day().to_string()),
            'S' => out.push_str(ordinal_suffix(date.day())),
            'D' => out.push_str(&date.format("%a").to_string()),
            'l' => out.push_str(&date.format("%A").to_string()),
            'N' => out.push_str(&date.weekday().number_from_monday().to_string()),
            'w' => out.push_str(&date.weekday().num_days_from_sunday().to_string()),
            'z' => out.push_str(&date.ordinal0().to_string()),
            'F' => out.push_str(&date.format("%B").to_string()),
            'M' => out.push_str(&date.format("%b").to_string()),
            'm' => out.push_str(&format!("{:02}", date.month())),
            'n' => out.push_str(&date.month().to_string()),
            't' => out.push_str(&days_in_month(date.year(), date.month()).to_string()),
            'L' => out.push(if is_leap_year(date.year()) { '1' } else { '0' }),
            'Y' => out.push_str(&format!("{:04}", date.year())),
            'y' => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
            'a' => out.push_str(if date.hour() < 12 { "am" } else { "pm" }),
            'A' => out.push_str(if date.hour() < 12 { "AM" } else { "PM" }),
            'g' => out.push_str(&date.hour12().1.to_string()),
            'G' => out.push_str(&date.hour().to_string()),
            'h' => out.push_str(&format!("{:02}", date.hour12().1)),
            'H' => out.push_str(&format!("{:02}", date.hour())),
            'i' => out.push_str(&format!("{:02}", date.minute())),
            's' => out.push_str(&format!("{:02}", date.second())),
            'U' => out.push_str(&date.timestamp().to_string()),
            'c' => out.push_str(&date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()),
            'r' => out.push_str(&date.format("%a, %d %b %Y %H:%M:%S %z").to_string()),
            'e' | 'T' => out.push_str(&date.format("%Z").to_string()),
            'O' => out.push_str(&date.format("%z").to_string()),
            'P' => out.push_str(&date.format("%:z").to_string()),
            other => out.push(other),
        }
    }

    out
}

/// Formats an epoch timestamp in the given timezone.
///
/// Fails with [`HumaneError::InvalidInstant`] when the timestamp lies outside
/// the representable date range.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use libhumane::datefmt::format_timestamp;
///
/// assert_eq!(format_timestamp(0, "jS F Y", &Utc).unwrap(), "1st January 1970");
/// ```
pub fn format_timestamp<Tz>(timestamp: i64, format: &str, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let date = to_datetime(timestamp, tz)?;
    Ok(format_date(&date, format))
}

/// Resolves an epoch timestamp to a date-time in `tz`.
pub(crate) fn to_datetime<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Result<DateTime<Tz>> {
    tz.timestamp_opt(timestamp, 0).single().ok_or_else(|| {
        HumaneError::invalid_instant(timestamp.to_string(), "timestamp out of range")
    })
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}
