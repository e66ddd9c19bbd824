//! Relative dates and date ranges.
//!
//! Both operations compare against "now". Rather than reading the clock
//! deep inside the formatting code, "now" (and with it the calendar
//! timezone) is captured once into a [`DateContext`] and handed down, so a
//! single call always sees one consistent moment.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use libhumane::date::{DateContext, MonthFormat, friendly, nice_range};
//! use libhumane::Instant;
//!
//! let now = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap();
//! let ctx = DateContext::new(now);
//!
//! let hour_ago = Instant::from(now.timestamp() - 3600);
//! assert_eq!(friendly(&hour_ago, 604800, "j F Y", &ctx).unwrap(), "1 hour ago");
//!
//! let range = nice_range(
//!     &Instant::from("2020-01-05"),
//!     &Instant::from("2020-01-20"),
//!     MonthFormat::Full,
//!     &ctx,
//! );
//! assert_eq!(range.unwrap(), "5th–20th January 2020");
//! ```

use crate::datefmt::{format_date, format_timestamp, to_datetime};
use crate::error::Result;
use crate::instant::Instant;
use crate::interval::format_interval;
use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;


/// How far back, in seconds, a date is still described relatively (one week).
pub const DEFAULT_MAX_FRIENDLY_SECONDS: i64 = 604_800;

/// Phrase used for dates less than a second old.
pub const JUST_NOW: &str = "just now";

/// Separator placed between the two halves of a range.
pub const RANGE_SEPARATOR: &str = "–";

/// A snapshot of the current moment and the timezone dates are read in.
#[derive(Debug, Clone)]
pub struct DateContext<Tz: TimeZone> {
    now: DateTime<Tz>,
}

impl<Tz: TimeZone> DateContext<Tz> {
    /// Creates a context pinned to `now`. The timezone of `now` is used for
    /// all calendar comparisons and renderings.
    pub fn new(now: DateTime<Tz>) -> Self {
        Self { now }
    }

    /// The moment this context was captured at.
    pub fn now(&self) -> &DateTime<Tz> {
        &self.now
    }

    /// The captured moment as whole seconds since the epoch.
    pub fn timestamp(&self) -> i64 {
        self.now.timestamp()
    }

    /// The timezone dates are interpreted and rendered in.
    pub fn timezone(&self) -> Tz {
        self.now.timezone()
    }
}

impl DateContext<Local> {
    /// Captures the system clock in the system timezone.
    pub fn local() -> Self {
        Self::new(Local::now())
    }
}

impl DateContext<Utc> {
    /// Captures the system clock in UTC.
    pub fn utc() -> Self {
        Self::new(Utc::now())
    }
}

/// Month name style used in ranges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthFormat {
    /// `January`
    #[default]
    Full,
    /// `Jan`
    Abbreviated,
}

impl MonthFormat {
    /// The date-format token rendering this month style.
    pub fn token(self) -> char {
        match self {
            MonthFormat::Full => 'F',
            MonthFormat::Abbreviated => 'M',
        }
    }
}

impl From<&str> for MonthFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "abbreviated" | "short" | "m" => MonthFormat::Abbreviated,
            _ => MonthFormat::Full,
        }
    }
}

/// Describes a date relative to now, such as `"4 days ago"`.
///
/// Dates older than `max_friendly_seconds`, and dates in the future, are
/// rendered with `unfriendly_format` instead (see [`crate::datefmt`]). A date
/// less than a second old is `"just now"`. The relative form always uses a
/// single unit.
pub fn friendly<Tz>(
    instant: &Instant,
    max_friendly_seconds: i64,
    unfriendly_format: &str,
    ctx: &DateContext<Tz>,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let tz = ctx.timezone();
    let timestamp = instant.to_epoch_seconds(&tz)?;
    let delta = ctx.timestamp().saturating_sub(timestamp);

    if delta > max_friendly_seconds || delta < 0 {
        format_timestamp(timestamp, unfriendly_format, &tz)
    } else if delta < 1 {
        Ok(JUST_NOW.to_string())
    } else {
        Ok(format!("{} ago", format_interval(delta, 1)))
    }
}

/// Renders the shortest unambiguous description of a date range.
///
/// Parts shared by both ends are written once: a range inside one month
/// reads `"5th–20th January"`. The year is left out entirely when both ends
/// fall in the current year, except that a range which has already finished
/// gets the year appended to its end date. The ends may be given in either
/// order.
pub fn nice_range<Tz>(
    start: &Instant,
    end: &Instant,
    month_format: MonthFormat,
    ctx: &DateContext<Tz>,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let tz = ctx.timezone();
    let mut start_ts = start.to_epoch_seconds(&tz)?;
    let mut end_ts = end.to_epoch_seconds(&tz)?;
    if start_ts > end_ts {
        std::mem::swap(&mut start_ts, &mut end_ts);
    }

    let first = to_datetime(start_ts, &tz)?;
    let last = to_datetime(end_ts, &tz)?;

    let same_day = first.date_naive() == last.date_naive();
    let same_month = same_day || (first.year(), first.month()) == (last.year(), last.month());
    let same_year = same_month || first.year() == last.year();
    let this_year = ctx.now().year();
    let current_year = first.year() == this_year && last.year() == this_year;
    let finished = end_ts < ctx.timestamp();

    let month = month_format.token();
    let day_month = format!("jS {}", month);
    let day_month_year = format!("jS {} Y", month);
    let closing = if finished { &day_month_year } else { &day_month };
    let span = |head: &str, tail: &str| {
        format!(
            "{}{}{}",
            format_date(&first, head),
            RANGE_SEPARATOR,
            format_date(&last, tail)
        )
    };

    let rendered = if same_day && current_year {
        format_date(&first, &day_month)
    } else if same_month && current_year {
        span("jS", closing)
    } else if current_year {
        span(&day_month, closing)
    } else if same_day {
        format_date(&first, &day_month_year)
    } else if same_month {
        span("jS", &day_month_year)
    } else if same_year {
        span(&day_month, &day_month_year)
    } else {
        span(&day_month_year, &day_month_year)
    };

    Ok(rendered)
}
