//! Date handling for printed GRs.
//!
//! The API sends dates as plain `YYYY-MM-DD`, RFC 3339 timestamps or naive
//! timestamps. Everything is printed as `dd/mm/yyyy`; a value that does not
//! parse is printed as received rather than dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::fallback::DASH;

/// Printed date format.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an API date. RFC 3339 timestamps keep the calendar date of their own offset.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.date())
}

/// Format a date for printing.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Format a raw API date, or return it trimmed if it does not parse.
pub fn format_raw(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format_date(date),
        None => {
            log::debug!("Unparseable date {:?} printed as received", raw);
            raw.trim().to_string()
        },
    }
}

/// Header date: the request's date, or `today` when absent.
pub fn header_date(raw: Option<&str>, today: NaiveDate) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => format_raw(raw),
        None => format_date(today),
    }
}

/// Table date: the formatted date, or `-` when absent.
pub fn optional_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => format_raw(raw),
        None => DASH.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_date() {
        assert_eq!(parse_date("2024-01-05"), Some(ymd(2024, 1, 5)));
        assert_eq!(format_raw("2024-01-05"), "05/01/2024");
    }

    #[test]
    fn test_rfc3339_keeps_offset_date() {
        assert_eq!(parse_date("2024-03-31T23:30:00+05:30"), Some(ymd(2024, 3, 31)));
        assert_eq!(parse_date("2024-03-31T10:00:00.123Z"), Some(ymd(2024, 3, 31)));
    }

    #[test]
    fn test_naive_timestamps() {
        assert_eq!(parse_date("2023-12-01T08:15:00"), Some(ymd(2023, 12, 1)));
        assert_eq!(parse_date("2023-12-01 08:15:00.250"), Some(ymd(2023, 12, 1)));
    }

    #[test]
    fn test_unparseable_printed_raw() {
        assert_eq!(parse_date("next tuesday"), None);
        assert_eq!(format_raw("  next tuesday "), "next tuesday");
    }

    #[test]
    fn test_header_date_defaults_to_today() {
        let today = ymd(2025, 7, 9);
        assert_eq!(header_date(None, today), "09/07/2025");
        assert_eq!(header_date(Some("  "), today), "09/07/2025");
        assert_eq!(header_date(Some("2024-01-05"), today), "05/01/2024");
    }

    #[test]
    fn test_optional_date_dash() {
        assert_eq!(optional_date(None), "-");
        assert_eq!(optional_date(Some("")), "-");
        assert_eq!(optional_date(Some("2024-02-29")), "29/02/2024");
    }
}
