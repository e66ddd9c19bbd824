//! High-level API for the Humane library.
//!
//! [`Humane`] bundles a [`Config`] with every formatter so callers can set
//! their defaults once and then format without repeating parameters.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use libhumane::date::DateContext;
//! use libhumane::Humane;
//!
//! let humane = Humane::builder().granularity(3).build().unwrap();
//! assert_eq!(humane.interval(90061), "1 day 1 hour 1 minute");
//!
//! let ctx = DateContext::new(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
//! let range = humane.range_at("2020-01-05", "2020-01-20", &ctx).unwrap();
//! assert_eq!(range, "5th–20th January");
//!
//! assert_eq!(humane.title_case("the lord of the rings"), "The Lord of the Rings");
//! ```

use crate::config::Config;
use crate::date::{self, DateContext, MonthFormat};
use crate::error::Result;
use crate::instant::Instant;
use crate::interval::format_interval;
use crate::text;
use chrono::{Local, TimeZone};
use std::fmt::Display;
use std::path::PathBuf;

#[cfg(test)]
#[path = "humane_tests.rs"]
mod tests;

/// Formatter front end carrying its own defaults.
#[derive(Debug, Clone, Default)]
pub struct Humane {
    config: Config,
}

impl Humane {
    /// Creates a formatter with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter from an existing configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create a new builder for configuring a formatter.
    pub fn builder() -> HumaneBuilder {
        HumaneBuilder::new()
    }

    /// The configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Formats a duration with the configured granularity.
    pub fn interval(&self, seconds: i64) -> String {
        format_interval(seconds, self.config.date.granularity)
    }

    /// Describes `instant` relative to the current local time.
    pub fn friendly(&self, instant: impl Into<Instant>) -> Result<String> {
        self.friendly_at(instant, &DateContext::<Local>::local())
    }

    /// Describes `instant` relative to the moment captured in `ctx`.
    pub fn friendly_at<Tz>(&self, instant: impl Into<Instant>, ctx: &DateContext<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        date::friendly(
            &instant.into(),
            self.config.date.max_friendly_seconds,
            &self.config.date.unfriendly_format,
            ctx,
        )
    }

    /// Renders a date range against the current local time.
    pub fn range(&self, start: impl Into<Instant>, end: impl Into<Instant>) -> Result<String> {
        self.range_at(start, end, &DateContext::<Local>::local())
    }

    /// Renders a date range against the moment captured in `ctx`.
    pub fn range_at<Tz>(
        &self,
        start: impl Into<Instant>,
        end: impl Into<Instant>,
        ctx: &DateContext<Tz>,
    ) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        date::nice_range(
            &start.into(),
            &end.into(),
            self.config.date.month_format,
            ctx,
        )
    }

    /// See [`text::title_case`].
    pub fn title_case(&self, input: &str) -> String {
        text::title_case(input)
    }

    /// See [`text::widont`].
    pub fn widont(&self, input: &str) -> String {
        text::widont(input)
    }

    /// See [`text::slugged`].
    pub fn slugged(&self, input: &str) -> String {
        text::slugged(input)
    }
}

/// Builder for creating a [`Humane`] with custom defaults.
///
/// Individual settings override whatever the configuration file or
/// [`HumaneBuilder::with_config`] supplied.
#[derive(Debug, Default)]
pub struct HumaneBuilder {
    config: Option<Config>,
    config_path: Option<PathBuf>,
    granularity: Option<i64>,
    max_friendly_seconds: Option<i64>,
    unfriendly_format: Option<String>,
    month_format: Option<MonthFormat>,
}

impl HumaneBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads defaults from a YAML configuration file at build time.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Uses an already loaded configuration. Takes precedence over
    /// [`HumaneBuilder::with_config_file`].
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Number of unit phrases in an interval.
    pub fn granularity(mut self, granularity: i64) -> Self {
        self.granularity = Some(granularity);
        self
    }

    /// Age in seconds after which a date is shown absolutely.
    pub fn max_friendly_seconds(mut self, seconds: i64) -> Self {
        self.max_friendly_seconds = Some(seconds);
        self
    }

    /// Token layout for absolute dates.
    pub fn unfriendly_format(mut self, format: impl Into<String>) -> Self {
        self.unfriendly_format = Some(format.into());
        self
    }

    /// Month name style in ranges.
    pub fn month_format(mut self, month_format: MonthFormat) -> Self {
        self.month_format = Some(month_format);
        self
    }

    /// Builds the formatter, reading the configuration file if one was set.
    pub fn build(self) -> Result<Humane> {
        let mut config = match (self.config, self.config_path) {
            (Some(config), _) => config,
            (None, Some(path)) => Config::load(Some(&path))?,
            (None, None) => Config::default(),
        };

        if let Some(granularity) = self.granularity {
            config.date.granularity = granularity;
        }
        if let Some(seconds) = self.max_friendly_seconds {
            config.date.max_friendly_seconds = seconds;
        }
        if let Some(format) = self.unfriendly_format {
            config.date.unfriendly_format = format;
        }
        if let Some(month_format) = self.month_format {
            config.date.month_format = month_format;
        }

        Ok(Humane { config })
    }
}
