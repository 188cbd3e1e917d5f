//! `YYYY-MM-DD` text entry for the custom range fields.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;

pub const DATE_INPUT_LEN: usize = 10;

static DATE_INPUT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}").expect("valid date input regex"));

/// Accepts exactly ten characters shaped like a date that also exists on
/// the calendar. `2024-02-30` is rejected.
pub fn is_valid_date_input(value: &str) -> bool {
    value.len() == DATE_INPUT_LEN && DATE_INPUT_PREFIX.is_match(value) && parse_calendar_date(value).is_some()
}

/// Parses a valid input to UTC midnight of that day.
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    if !is_valid_date_input(value) {
        return None;
    }
    parse_calendar_date(value).map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

pub fn format_date_input(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accepts_padded_dates() {
        assert!(is_valid_date_input("2024-01-31"));
        assert_eq!(
            parse_date_input("2024-01-31"),
            Some(Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_date_input("2024-1-31"));
        assert!(!is_valid_date_input("2024-01-311"));
        assert!(!is_valid_date_input(""));
    }

    #[test]
    fn rejects_dates_missing_from_the_calendar() {
        assert!(!is_valid_date_input("2023-02-29"));
        assert!(!is_valid_date_input("2024-13-01"));
        assert!(is_valid_date_input("2024-02-29"));
    }

    #[test]
    fn rejects_partial_typing() {
        assert!(!is_valid_date_input("2024-01-3x"));
        assert!(!is_valid_date_input("24-01-2024"));
        assert!(!is_valid_date_input("2024/01/31"));
    }

    #[test]
    fn formats_zero_padded() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 17, 45, 0).unwrap();
        assert_eq!(format_date_input(at), "2024-03-05");
    }
}
