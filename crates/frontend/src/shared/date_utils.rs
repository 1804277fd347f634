/// Utilities for date parsing and formatting
use chrono::{Duration, NaiveDate};

/// Wire format of dates exchanged with the backend
pub const ISO_DATE: &str = "%Y-%m-%d";

pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_DATE).ok()
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    match parse_iso(date_str) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Short axis label: "15/03"
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// The last `days` days ending at `end`, not starting before `min`
pub fn range_ending_at(end: NaiveDate, days: i64, min: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = end - Duration::days(days.max(1) - 1);
    (start.max(min), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_iso_roundtrip() {
        assert_eq!(parse_iso("2024-12-31"), Some(date(2024, 12, 31)));
        assert_eq!(to_iso(date(2024, 1, 5)), "2024-01-05");
        assert_eq!(parse_iso(""), None);
    }

    #[test]
    fn test_range_ending_at() {
        let min = date(2024, 1, 1);
        assert_eq!(
            range_ending_at(date(2024, 12, 31), 30, min),
            (date(2024, 12, 2), date(2024, 12, 31))
        );
        assert_eq!(
            range_ending_at(date(2024, 1, 10), 30, min),
            (min, date(2024, 1, 10))
        );
        assert_eq!(
            range_ending_at(date(2024, 6, 1), 1, min),
            (date(2024, 6, 1), date(2024, 6, 1))
        );
    }
}
