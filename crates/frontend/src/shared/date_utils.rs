/// Utilities for date and time formatting
///
/// Timestamps from the API are ISO-8601 strings, with or without offset.
use chrono::{DateTime, NaiveDateTime};

/// Format ISO datetime string to YYYY-MM-DD HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    datetime_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "2024-03-15 14:02"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59+08:00"),
            "2024-12-31 23:59"
        );
        assert_eq!(format_datetime("2024-05-01T08:30:00"), "2024-05-01 08:30");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
