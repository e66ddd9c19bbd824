//! Extension traits for host date and text values.
//!
//! A host type opts in by implementing one small capability trait:
//! [`Temporal`] for anything that is a point in time, [`Renderable`] for
//! anything that has a display string. The formatting helpers then become
//! available as methods through [`DateExt`] and [`TextExt`].
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use libhumane::decorate::{DateExt, TextExt};
//!
//! let launch = Utc.with_ymd_and_hms(2020, 1, 4, 9, 0, 0).unwrap();
//! assert!(launch.is_weekend());
//! assert_eq!(launch.iso8601(), "2020-01-04T09:00:00+00:00");
//!
//! assert_eq!("the wind in the willows".title_case(), "The Wind in the Willows");
//! ```

use crate::date::{self, DateContext, MonthFormat};
use crate::datefmt::{ISO8601, format_date};
use crate::error::Result;
use crate::instant::Instant;
use crate::interval::format_interval;
use crate::text;
use chrono::{DateTime, TimeZone};
use std::borrow::Cow;
use std::fmt::Display;


/// A host value that represents a point in time.
pub trait Temporal {
    /// Seconds since the Unix epoch.
    fn epoch_seconds(&self) -> i64;

    /// Renders the value with the token mini-language of [`crate::datefmt`].
    fn render(&self, format: &str) -> String;
}

impl<Tz> Temporal for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn epoch_seconds(&self) -> i64 {
        self.timestamp()
    }

    fn render(&self, format: &str) -> String {
        format_date(self, format)
    }
}

/// A host value that has a display string.
pub trait Renderable {
    /// The plain display string, already escaped for its destination.
    fn for_template(&self) -> Cow<'_, str>;
}

impl Renderable for str {
    fn for_template(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Renderable for String {
    fn for_template(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// Date helpers available on every [`Temporal`] value.
pub trait DateExt: Temporal {
    /// ISO 8601 weekday, 1 (Monday) through 7 (Sunday). Zero if the host
    /// renders the `N` token as something other than a number.
    fn day_of_week(&self) -> u32 {
        self.render("N").trim().parse().unwrap_or_default()
    }

    /// True on Saturdays and Sundays.
    fn is_weekend(&self) -> bool {
        self.day_of_week() >= 6
    }

    /// The value as a full ISO 8601 string.
    fn iso8601(&self) -> String {
        self.render(ISO8601)
    }

    /// Relative description such as `"4 days ago"`; see [`date::friendly`].
    fn friendly<Tz>(
        &self,
        max_friendly_seconds: i64,
        unfriendly_format: &str,
        ctx: &DateContext<Tz>,
    ) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        date::friendly(
            &Instant::EpochSeconds(self.epoch_seconds()),
            max_friendly_seconds,
            unfriendly_format,
            ctx,
        )
    }

    /// Time elapsed between this value and now, e.g. `"3 hours 4 minutes"`.
    fn interval_from_now<Tz: TimeZone>(&self, granularity: i64, ctx: &DateContext<Tz>) -> String {
        format_interval(
            ctx.timestamp().saturating_sub(self.epoch_seconds()),
            granularity,
        )
    }

    /// Shortest range from this value to `other`; see [`date::nice_range`].
    fn nice_range<Tz>(
        &self,
        other: &Instant,
        month_format: MonthFormat,
        ctx: &DateContext<Tz>,
    ) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        date::nice_range(
            &Instant::EpochSeconds(self.epoch_seconds()),
            other,
            month_format,
            ctx,
        )
    }
}

impl<T: Temporal + ?Sized> DateExt for T {}

/// Text helpers available on every [`Renderable`] value.
pub trait TextExt: Renderable {
    /// See [`text::widont`].
    fn widont(&self) -> String {
        text::widont(&self.for_template())
    }

    /// See [`text::title_case`].
    fn title_case(&self) -> String {
        text::title_case(&self.for_template())
    }

    /// See [`text::slugged`].
    fn slugged(&self) -> String {
        text::slugged(&self.for_template())
    }
}

impl<T: Renderable + ?Sized> TextExt for T {}
