/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Placeholder for a missing date in tables
pub const NO_DATE: &str = "-";

/// Format timestamp to DD.MM.YYYY HH:MM
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// Format calendar day to DD.MM.YYYY
pub fn format_date(value: &NaiveDate) -> String {
    value.format("%d.%m.%Y").to_string()
}

pub fn format_datetime_opt(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| NO_DATE.to_string())
}

pub fn format_date_opt(value: Option<&NaiveDate>) -> String {
    value.map(format_date).unwrap_or_else(|| NO_DATE.to_string())
}

/// Value for `<input type="date">`; empty when unset
pub fn to_input_value(value: Option<NaiveDate>) -> String {
    value.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

/// Parse `<input type="date">`; empty or malformed input is `None`
pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// First and last day of a month
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// Month containing `day`
pub fn month_of(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    month_bounds(day.year(), day.month())
}

/// Month before the one containing `day`
pub fn previous_month_of(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let (year, month) = if day.month() == 1 {
        (day.year() - 1, 12)
    } else {
        (day.year(), day.month() - 1)
    };
    month_bounds(year, month)
}

/// Monday..Sunday week containing `day`
pub fn week_of(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day - Duration::days(i64::from(day.weekday().num_days_from_monday()));
    (start, start + Duration::days(6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_datetime() {
        let value = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&value), "15.03.2024 14:02");
        assert_eq!(format_datetime_opt(None), "-");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&day(2024, 3, 15)), "15.03.2024");
        assert_eq!(format_date_opt(Some(&day(2024, 12, 31))), "31.12.2024");
    }

    #[test]
    fn test_input_value_round_trip() {
        assert_eq!(to_input_value(Some(day(2024, 2, 9))), "2024-02-09");
        assert_eq!(from_input_value("2024-02-09"), Some(day(2024, 2, 9)));
        assert_eq!(from_input_value(""), None);
        assert_eq!(from_input_value("invalid"), None);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(2024, 2), Some((day(2024, 2, 1), day(2024, 2, 29))));
        assert_eq!(month_bounds(2024, 12), Some((day(2024, 12, 1), day(2024, 12, 31))));
        assert_eq!(month_bounds(2024, 13), None);
        assert_eq!(previous_month_of(day(2024, 1, 20)), Some((day(2023, 12, 1), day(2023, 12, 31))));
    }

    #[test]
    fn test_week_of() {
        // 2024-05-15 is a Wednesday
        assert_eq!(week_of(day(2024, 5, 15)), (day(2024, 5, 13), day(2024, 5, 19)));
        assert_eq!(week_of(day(2024, 5, 13)), (day(2024, 5, 13), day(2024, 5, 19)));
    }
}
