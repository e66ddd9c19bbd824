//! Interval formatting.
//!
//! Turns a duration in seconds into a bounded-granularity phrase such as
//! `"3 hours 4 minutes"`, largest unit first.


/// Number of unit phrases shown when the caller does not choose.
pub const DEFAULT_GRANULARITY: i64 = 2;

/// Returned when no unit fits the duration.
pub const ZERO_INTERVAL: &str = "0 seconds";

/// A single row of the unit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    /// Phrase used when the count is exactly one.
    pub singular: &'static str,
    /// Phrase template for every other count; `:count` is substituted.
    pub plural: &'static str,
    /// Length of one unit in seconds.
    pub seconds: u64,
}

impl Unit {
    const fn new(singular: &'static str, plural: &'static str, seconds: u64) -> Self {
        Self {
            singular,
            plural,
            seconds,
        }
    }

    /// Renders `count` of this unit.
    pub fn phrase(&self, count: u64) -> String {
        if count == 1 {
            self.singular.to_string()
        } else {
            self.plural.replace(":count", &count.to_string())
        }
    }
}

/// Units in decomposition order, strictly descending by length.
pub const UNIT_TABLE: [Unit; 6] = [
    Unit::new("1 year", ":count years", 31_536_000),
    Unit::new("1 week", ":count weeks", 604_800),
    Unit::new("1 day", ":count days", 86_400),
    Unit::new("1 hour", ":count hours", 3_600),
    Unit::new("1 minute", ":count minutes", 60),
    Unit::new("1 second", ":count seconds", 1),
];

/// Formats an interval with the requested granularity.
///
/// The sign of `seconds` is ignored. At most `granularity` unit phrases are
/// produced; a granularity of zero or less produces none, which renders as
/// `"0 seconds"` just like a sub-second duration.
///
/// # Examples
///
/// ```
/// use libhumane::interval::format_interval;
///
/// assert_eq!(format_interval(3 * 3600 + 4 * 60, 2), "3 hours 4 minutes");
/// assert_eq!(format_interval(90061, 2), "1 day 1 hour");
/// assert_eq!(format_interval(-59, 2), "59 seconds");
/// assert_eq!(format_interval(0, 2), "0 seconds");
/// ```
pub fn format_interval(seconds: i64, granularity: i64) -> String {
    let mut remaining = seconds.unsigned_abs();
    let mut budget = granularity;
    let mut phrases: Vec<String> = Vec::new();

    for unit in UNIT_TABLE.iter() {
        if budget <= 0 {
            break;
        }
        if remaining >= unit.seconds {
            let count = remaining / unit.seconds;
            phrases.push(unit.phrase(count));
            remaining %= unit.seconds;
            budget -= 1;
        }
    }

    if phrases.is_empty() {
        ZERO_INTERVAL.to_string()
    } else {
        phrases.join(" ")
    }
}
