use super::Rendered;
use crate::context::AppContext;
use crate::format::{self, OutputFormat};
use chrono::TimeZone;
use libhumane::date::{self, DateContext};
use libhumane::datefmt;
use libhumane::interval::format_interval;
use libhumane::{Instant, MonthFormat};
use std::fmt::Display;
use tracing::debug;

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;

/// Render a duration, using the configured granularity unless one is given
pub fn render_interval(ctx: &AppContext, seconds: i64, granularity: Option<i64>) -> Rendered {
    let granularity = granularity.unwrap_or(ctx.config.date.granularity);
    debug!(seconds, granularity, "rendering interval");
    Rendered::new(seconds.to_string(), format_interval(seconds, granularity))
}

/// Describe a date relative to the moment held by `now`
pub fn render_friendly<Tz>(
    ctx: &AppContext,
    input: &str,
    max_seconds: Option<i64>,
    unfriendly_format: Option<&str>,
    now: &DateContext<Tz>,
) -> libhumane::Result<Rendered>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let settings = &ctx.config.date;
    let output = date::friendly(
        &Instant::from(input),
        max_seconds.unwrap_or(settings.max_friendly_seconds),
        unfriendly_format.unwrap_or(&settings.unfriendly_format),
        now,
    )?;
    Ok(Rendered::new(input, output))
}

/// Render a date range relative to the moment held by `now`
pub fn render_range<Tz>(
    ctx: &AppContext,
    start: &str,
    end: &str,
    abbreviated: bool,
    now: &DateContext<Tz>,
) -> libhumane::Result<Rendered>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let month_format = if abbreviated {
        MonthFormat::Abbreviated
    } else {
        ctx.config.date.month_format
    };
    let output = date::nice_range(&Instant::from(start), &Instant::from(end), month_format, now)?;
    Ok(Rendered::new(format!("{} {}", start, end), output))
}

/// Render a date with a token layout in the timezone held by `now`
pub fn render_date<Tz>(input: &str, layout: &str, now: &DateContext<Tz>) -> libhumane::Result<Rendered>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let tz = now.timezone();
    let timestamp = Instant::from(input).to_epoch_seconds(&tz)?;
    let output = datefmt::format_timestamp(timestamp, layout, &tz)?;
    Ok(Rendered::new(input, output))
}

/// Handle the interval subcommand
pub fn handle_interval(ctx: &AppContext, seconds: i64, granularity: Option<i64>, fmt: OutputFormat) {
    format::emit(ctx, &render_interval(ctx, seconds, granularity), fmt);
}

/// Handle the friendly subcommand
pub fn handle_friendly(
    ctx: &AppContext,
    input: &str,
    max_seconds: Option<i64>,
    unfriendly_format: Option<&str>,
    utc: bool,
    fmt: OutputFormat,
) {
    let result = if utc {
        render_friendly(ctx, input, max_seconds, unfriendly_format, &DateContext::utc())
    } else {
        render_friendly(ctx, input, max_seconds, unfriendly_format, &DateContext::local())
    };
    emit_result(ctx, result, fmt);
}

/// Handle the range subcommand
pub fn handle_range(
    ctx: &AppContext,
    start: &str,
    end: &str,
    abbreviated: bool,
    utc: bool,
    fmt: OutputFormat,
) {
    let result = if utc {
        render_range(ctx, start, end, abbreviated, &DateContext::utc())
    } else {
        render_range(ctx, start, end, abbreviated, &DateContext::local())
    };
    emit_result(ctx, result, fmt);
}

/// Handle the date subcommand
pub fn handle_date(ctx: &AppContext, input: &str, layout: &str, utc: bool, fmt: OutputFormat) {
    let result = if utc {
        render_date(input, layout, &DateContext::utc())
    } else {
        render_date(input, layout, &DateContext::local())
    };
    emit_result(ctx, result, fmt);
}

fn emit_result(ctx: &AppContext, result: libhumane::Result<Rendered>, fmt: OutputFormat) {
    match result {
        Ok(rendered) => format::emit(ctx, &rendered, fmt),
        Err(e) => format::fail(ctx, &e.to_string()),
    }
}
