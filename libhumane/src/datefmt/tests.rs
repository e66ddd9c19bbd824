use super::*;
use chrono::{FixedOffset, Utc};

fn sample() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 5, 14, 7, 9).unwrap()
}

#[test]
fn test_ordinal_suffixes() {
    let expected = [
        (1, "st"),
        (2, "nd"),
        (3, "rd"),
        (4, "th"),
        (11, "th"),
        (12, "th"),
        (13, "th"),
        (21, "st"),
        (22, "nd"),
        (23, "rd"),
        (30, "th"),
        (31, "st"),
    ];
    for (day, suffix) in expected {
        assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
    }
}

#[test]
fn test_default_unfriendly_format() {
    assert_eq!(format_date(&sample(), DEFAULT_UNFRIENDLY_FORMAT), "5 January 2020");
}

#[test]
fn test_day_and_month_tokens() {
    let date = sample();
    assert_eq!(format_date(&date, "jS F Y"), "5th January 2020");
    assert_eq!(format_date(&date, "jS M"), "5th Jan");
    assert_eq!(format_date(&date, "d/m/y"), "05/01/20");
    assert_eq!(format_date(&date, "n"), "1");
}

#[test]
fn test_weekday_tokens() {
    // 5 January 2020 was a Sunday
    let date = sample();
    assert_eq!(format_date(&date, "N"), "7");
    assert_eq!(format_date(&date, "w"), "0");
    assert_eq!(format_date(&date, "D l"), "Sun Sunday");
}

#[test]
fn test_time_tokens() {
    let date = sample();
    assert_eq!(format_date(&date, "H:i:s"), "14:07:09");
    assert_eq!(format_date(&date, "g a"), "2 pm");
    assert_eq!(format_date(&date, "h A"), "02 PM");
    assert_eq!(format_date(&date, "G"), "14");
}

#[test]
fn test_calendar_tokens() {
    let date = sample();
    assert_eq!(format_date(&date, "z"), "4");
    assert_eq!(format_date(&date, "t"), "31");
    assert_eq!(format_date(&date, "L"), "1");

    let feb = Utc.with_ymd_and_hms(2021, 2, 10, 0, 0, 0).unwrap();
    assert_eq!(format_date(&feb, "t L"), "28 0");
}

#[test]
fn test_iso8601_with_offset() {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let date = offset.with_ymd_and_hms(2020, 1, 5, 10, 0, 0).unwrap();
    assert_eq!(format_date(&date, ISO8601), "2020-01-05T10:00:00+02:00");
    assert_eq!(format_date(&date, "O P"), "+0200 +02:00");
}

#[test]
fn test_rfc2822_token() {
    assert_eq!(
        format_date(&sample(), "r"),
        "Sun, 05 Jan 2020 14:07:09 +0000"
    );
}

#[test]
fn test_epoch_token() {
    assert_eq!(format_date(&sample(), "U"), sample().timestamp().to_string());
}

#[test]
fn test_escaped_and_literal_characters() {
    let date = sample();
    assert_eq!(format_date(&date, "\\Y\\e\\a\\r: Y"), "Year: 2020");
    assert_eq!(format_date(&date, "j-n"), "5-1");
    // trailing backslash is dropped
    assert_eq!(format_date(&date, "Y\\"), "2020");
}

#[test]
fn test_format_timestamp_in_offset() {
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();
    // midnight UTC is still the previous day five hours west
    let ts = Utc.with_ymd_and_hms(2020, 1, 5, 0, 0, 0).unwrap().timestamp();
    assert_eq!(format_timestamp(ts, "jS F Y", &tz).unwrap(), "4th January 2020");
}

#[test]
fn test_format_timestamp_out_of_range() {
    let result = format_timestamp(i64::MAX, "Y", &Utc);
    assert!(matches!(result, Err(HumaneError::InvalidInstant { .. })));
}
