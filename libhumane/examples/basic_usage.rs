//! Basic usage example for libhumane
//!
//! Run with: cargo run --example basic_usage

use libhumane::{DateContext, DateExt, Humane, MonthFormat, TextExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Humane Library - Basic Usage Example ===\n");

    let humane = Humane::builder()
        .granularity(2)
        .month_format(MonthFormat::Full)
        .build()?;

    // 1. Intervals
    println!("1. Intervals:");
    for seconds in [0, 59, 3 * 3600 + 4 * 60, 90061, 40_000_000] {
        println!("   {:>10}s -> {}", seconds, humane.interval(seconds));
    }
    println!();

    // 2. Friendly dates, evaluated against one captured "now"
    println!("2. Friendly dates:");
    let ctx = DateContext::local();
    let now = ctx.timestamp();
    for offset in [0, 45, 3600, 3 * 86_400, 30 * 86_400, -86_400] {
        println!(
            "   now - {:>8}s -> {}",
            offset,
            humane.friendly_at(now - offset, &ctx)?
        );
    }
    println!();

    // 3. Date ranges
    println!("3. Date ranges:");
    for (start, end) in [
        ("2020-01-05", "2020-01-05"),
        ("2020-01-05", "2020-01-20"),
        ("2020-01-30", "2020-02-02"),
        ("2019-12-30", "2020-01-02"),
    ] {
        println!("   {} .. {} -> {}", start, end, humane.range_at(start, end, &ctx)?);
    }
    println!();

    // 4. Date helpers on chrono values
    println!("4. Date helpers:");
    let today = *ctx.now();
    println!("   ISO 8601:    {}", today.iso8601());
    println!("   Day of week: {}", today.day_of_week());
    println!("   Weekend:     {}", today.is_weekend());
    println!();

    // 5. Text
    println!("5. Text:");
    let title = "the lord of the rings: the return of the king";
    println!("   title case: {}", title.title_case());
    println!("   widont:     {}", title.widont());
    println!("   slugged:    {}", title.slugged());

    println!("\n=== Example Complete ===");
    Ok(())
}
