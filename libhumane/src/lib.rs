//! Humane - human-friendly date and text formatting
//!
//! Humane turns timestamps and strings into text meant for people: relative
//! dates, compact date ranges, interval phrases, title case, slugs and
//! widow-free headings.
//!
//! # Quick Start
//!
//! ```
//! use libhumane::Humane;
//!
//! let humane = Humane::new();
//!
//! assert_eq!(humane.interval(3 * 3600 + 4 * 60), "3 hours 4 minutes");
//! assert_eq!(humane.title_case("the lord of the rings"), "The Lord of the Rings");
//! assert_eq!(humane.slugged("Hello, World!"), "hello-world");
//! ```
//!
//! # Features
//!
//! - **Intervals**: `"1 day 1 hour"` with a bounded number of units
//! - **Friendly dates**: `"4 days ago"`, falling back to an absolute date
//! - **Date ranges**: `"5th–20th January"`, writing shared parts once
//! - **Title case**: English title case with small-word and punctuation rules
//! - **Widont and slugs**: non-breaking final word, URL-safe slugs
//!
//! # Main Types
//!
//! - [`Humane`] - Configured entry point for all formatters
//! - [`HumaneBuilder`] - Builder for custom defaults
//! - [`Instant`] - A point in time as epoch seconds, text, or a chrono value
//! - [`DateContext`] - The "now" and timezone a date call is evaluated against
//!
//! # Architecture
//!
//! Every formatter is a pure function in its own module. Anything that
//! depends on the current time takes a [`DateContext`], so the same inputs
//! always give the same output. Host types can gain the formatters as
//! methods through the traits in [`decorate`].

#![warn(clippy::all)]

/// Returns the libhumane crate version.
///
/// This is useful for version reporting in CLI tools and debugging.
///
/// # Examples
///
/// ```
/// let version = libhumane::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// High-level public API (main entry point)
mod humane;
pub use humane::{Humane, HumaneBuilder};

// Re-export commonly used types for convenience
pub use config::Config;
pub use date::{DateContext, MonthFormat};
pub use decorate::{DateExt, Renderable, Temporal, TextExt};
pub use error::{HumaneError, Result};
pub use instant::Instant;

pub mod config;
pub mod date;
pub mod datefmt;
pub mod decorate;
pub mod error;
pub mod instant;
pub mod interval;
pub mod text;
