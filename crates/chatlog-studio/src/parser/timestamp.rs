//! Date and time normalization for transcript headers.
//!
//! Dates are US `month/day/year`. Times come in 12-hour or 24-hour
//! notation, with or without seconds. Neither helper ever fails on odd
//! input: out-of-range dates roll over and unreadable times become hour 0.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

fn re_time() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(\d{1,2}):(\d{2})(?::\d{2})?\s*(AM|PM)?$").expect("time pattern is valid")
    })
}

/// Extract the hour (0-23) from a header time string
///
/// **Public** - used by the transcript parser and tests
///
/// Accepts `H:MM:SS AM/PM`, `H:MM AM/PM`, `H:MM` and `H:MM:SS`.
/// Anything else yields 0.
///
/// # Example
/// ```
/// use chatlog_studio::parser::parse_hour;
///
/// assert_eq!(parse_hour("1:59:53 PM"), 13);
/// assert_eq!(parse_hour("12:00 AM"), 0);
/// assert_eq!(parse_hour("13:05"), 13);
/// ```
pub fn parse_hour(time_str: &str) -> u32 {
    parse_clock(time_str).0
}

/// Extract (hour, minute) from a header time string; seconds are discarded
///
/// **Private** - shared by parse_hour and resolve_timestamp
fn parse_clock(time_str: &str) -> (u32, u32) {
    let Some(caps) = re_time().captures(time_str.trim()) else {
        return (0, 0);
    };

    let mut hour: u32 = caps[1].parse().unwrap_or(0);
    let mut minute: u32 = caps[2].parse().unwrap_or(0);

    if let Some(meridiem) = caps.get(3) {
        let is_pm = meridiem.as_str().eq_ignore_ascii_case("PM");
        if is_pm && hour != 12 {
            hour += 12;
        } else if !is_pm && hour == 12 {
            hour = 0;
        }
    }

    // "25:00" or "13:00 PM" cannot be placed on a clock
    if hour > 23 {
        return (0, 0);
    }
    if minute > 59 {
        minute = 0;
    }

    (hour, minute)
}

/// Build a calendar date from header components with rollover
///
/// **Public** - used by the transcript parser
///
/// A year below 100 is taken as `2000 + year`. Month and day are not
/// validated: month 13 lands in January of the next year, day 0 is the last
/// day of the previous month, day 32 spills into the next month.
///
/// Returns `None` only when the result is outside chrono's supported range.
pub fn resolve_date(month: u32, day: u32, year: i32) -> Option<NaiveDate> {
    let full_year = if year < 100 { 2000 + year } else { year };

    let months = i64::from(full_year) * 12 + i64::from(month) - 1;
    let y = i32::try_from(months.div_euclid(12)).ok()?;
    let m = u32::try_from(months.rem_euclid(12)).ok()? + 1;

    let first = NaiveDate::from_ymd_opt(y, m, 1)?;
    first.checked_add_signed(Duration::days(i64::from(day) - 1))
}

/// Combine a header's date and time strings into a timestamp
///
/// **Public (crate)** - called once per header line
pub(crate) fn resolve_timestamp(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let mut parts = date_str.split('/').map(|p| p.trim().parse::<u32>());
    let month = parts.next()?.ok()?;
    let day = parts.next()?.ok()?;
    let year = parts.next()?.ok()?;

    let date = resolve_date(month, day, i32::try_from(year).ok()?)?;
    let (hour, minute) = parse_clock(time_str);
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;

    Some(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_hour_twelve_hour() {
        assert_eq!(parse_hour("1:59:53 PM"), 13);
        assert_eq!(parse_hour("12:00 AM"), 0);
        assert_eq!(parse_hour("12:30 PM"), 12);
        assert_eq!(parse_hour("11:15 am"), 11);
        assert_eq!(parse_hour("9:05:00 pm"), 21);
    }

    #[test]
    fn test_parse_hour_twenty_four_hour() {
        assert_eq!(parse_hour("13:05"), 13);
        assert_eq!(parse_hour("00:45:10"), 0);
        assert_eq!(parse_hour("23:59"), 23);
    }

    #[test]
    fn test_parse_hour_narrow_nbsp_before_meridiem() {
        assert_eq!(parse_hour("3:07\u{202f}PM"), 15);
    }

    #[test]
    fn test_parse_hour_unrecognized_is_zero() {
        assert_eq!(parse_hour(""), 0);
        assert_eq!(parse_hour("noon"), 0);
        assert_eq!(parse_hour("1:2"), 0);
        assert_eq!(parse_hour("25:00"), 0);
        assert_eq!(parse_hour("13:00 PM"), 0);
    }

    #[test]
    fn test_bad_minutes_keep_hour() {
        assert_eq!(parse_hour("10:75"), 10);
        assert_eq!(parse_clock("10:75 PM"), (22, 0));

        let ts = resolve_timestamp("1/2/24", "10:75").unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 0);
    }

    #[test]
    fn test_resolve_date_two_digit_year() {
        assert_eq!(resolve_date(7, 7, 25), NaiveDate::from_ymd_opt(2025, 7, 7));
        assert_eq!(resolve_date(12, 31, 2019), NaiveDate::from_ymd_opt(2019, 12, 31));
    }

    #[test]
    fn test_resolve_date_rolls_over() {
        assert_eq!(resolve_date(1, 32, 24), NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(resolve_date(13, 1, 24), NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(resolve_date(3, 0, 24), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(resolve_date(0, 15, 24), NaiveDate::from_ymd_opt(2023, 12, 15));
        assert_eq!(resolve_date(2, 30, 23), NaiveDate::from_ymd_opt(2023, 3, 2));
    }

    #[test]
    fn test_resolve_timestamp_drops_seconds() {
        let ts = resolve_timestamp("7/7/25", "1:59:53 PM").unwrap();
        assert_eq!(ts.hour(), 13);
        assert_eq!(ts.minute(), 59);
        assert_eq!(ts.second(), 0);
    }

    #[test]
    fn test_resolve_timestamp_bad_time_keeps_date() {
        let ts = resolve_timestamp("1/2/24", "??").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(ts.hour(), 0);
    }
}
