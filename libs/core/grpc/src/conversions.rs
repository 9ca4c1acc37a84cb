//! Protobuf ↔ domain helpers for types proto3 has no native form for.
//!
//! Timestamps travel as RFC 3339 strings in UTC.

use chrono::{DateTime, SecondsFormat, Utc};

/// `2024-05-01T12:30:00.123456Z`
pub fn datetime_to_rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Accepts any RFC 3339 offset and normalizes to UTC.
pub fn rfc3339_to_datetime(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid RFC 3339 timestamp '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_in_utc_with_z_suffix() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(datetime_to_rfc3339(dt), "2024-05-01T12:30:00.000000Z");
    }

    #[test]
    fn parses_offsets_into_utc() {
        let dt = rfc3339_to_datetime("2024-05-01T14:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        let err = rfc3339_to_datetime("yesterday").unwrap_err();
        assert!(err.contains("yesterday"));
    }
}
