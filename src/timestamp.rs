//! UTC timestamps at seconds precision.
//!
//! Every timestamp in an observatory record is stored as UTC with no
//! sub-second component and rendered as `YYYY-MM-DDTHH:MM:SSZ`. Input data
//! arrives from mixed producers, so parsing accepts any RFC 3339 offset
//! (converted to UTC) as well as the offset-less `YYYY-MM-DDTHH:MM:SS` form
//! some exporters emit, which is taken to be UTC.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a string cannot be read as a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid timestamp: {input:?}")]
pub struct TimestampParseError {
    input: String,
}

impl TimestampParseError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A UTC timestamp truncated to seconds precision.
///
/// Construction always normalizes: offsets are converted to UTC and
/// sub-seconds are discarded, so two timestamps naming the same second
/// compare equal and serialize to the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Wrap a `DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub fn unix_epoch() -> Self {
        Self(DateTime::UNIX_EPOCH)
    }

    /// Build a timestamp from calendar components, interpreted as UTC.
    ///
    /// Returns `None` for dates that do not exist (e.g. February 30th).
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        chrono::NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, sec))
            .map(|naive| Self(DateTime::from_naive_utc_and_offset(naive, Utc)))
    }

    /// Parse a timestamp string.
    ///
    /// Accepts RFC 3339 with any offset (converted to UTC) and the
    /// offset-less `YYYY-MM-DDTHH:MM:SS[.fff]` form, which is read as UTC.
    /// Sub-seconds are truncated in both cases.
    pub fn parse(s: &str) -> Result<Self, TimestampParseError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                let dt = DateTime::from_naive_utc_and_offset(naive, Utc);
                return Ok(Self(truncate_to_seconds(dt)));
            }
        }
        Err(TimestampParseError { input: s.to_string() })
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The calendar year of the instant, in UTC.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// This instant shifted forward by whole days.
    ///
    /// Saturates to `self` if the result would leave chrono's representable
    /// range.
    pub fn plus_days(&self, days: i64) -> Self {
        match Duration::try_days(days).and_then(|d| self.0.checked_add_signed(d)) {
            Some(dt) => Self(dt),
            None => *self,
        }
    }

    /// This instant shifted backward by whole days.
    pub fn minus_days(&self, days: i64) -> Self {
        self.plus_days(-days)
    }

    /// Render as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

// Serialized form is the canonical string, so a validated record written
// back out parses again under the same field rules.
impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse(&s).map_err(D::Error::custom)
    }
}

/// Drop the sub-second component of an instant.
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_has_no_subseconds() {
        assert_eq!(Timestamp::now().as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap();
        let with_nanos = dt.with_nanosecond(123_456_789).unwrap();
        let ts = Timestamp::from_utc(with_nanos);
        assert_eq!(ts.to_iso8601(), "2024-03-15T12:30:45Z");
    }

    #[test]
    fn test_parse_z_suffix() {
        let ts = Timestamp::parse("2024-01-15T08:00:00Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T08:00:00Z");
    }

    #[test]
    fn test_parse_offset_converts_to_utc() {
        let ts = Timestamp::parse("2024-01-15T13:00:00+05:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T08:00:00Z");
    }

    #[test]
    fn test_parse_naive_assumed_utc() {
        let ts = Timestamp::parse("2024-01-15T08:00:00").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T08:00:00Z");
    }

    #[test]
    fn test_parse_naive_with_microseconds() {
        let ts = Timestamp::parse("2024-01-15T08:00:00.123456").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T08:00:00Z");
    }

    #[test]
    fn test_parse_subseconds_truncated() {
        let ts = Timestamp::parse("2024-01-15T08:00:00.999Z").unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-15T08:00:00Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("2024-01-15").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = Timestamp::parse("bogus").unwrap_err();
        assert_eq!(err.input(), "bogus");
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_from_ymd_hms() {
        let ts = Timestamp::from_ymd_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(ts.to_iso8601(), "2024-01-01T00:00:00Z");
        assert!(Timestamp::from_ymd_hms(2024, 2, 30, 0, 0, 0).is_none());
    }

    #[test]
    fn test_day_arithmetic() {
        let base = Timestamp::from_ymd_hms(2024, 1, 1, 6, 0, 0).unwrap();
        assert_eq!(base.plus_days(30).to_iso8601(), "2024-01-31T06:00:00Z");
        assert_eq!(base.minus_days(1).to_iso8601(), "2023-12-31T06:00:00Z");
        assert_eq!(base.plus_days(0), base);
    }

    #[test]
    fn test_year() {
        let ts = Timestamp::from_ymd_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(ts.year(), 2024);
    }

    #[test]
    fn test_ordering() {
        let earlier = Timestamp::parse("2024-01-15T08:00:00Z").unwrap();
        let later = Timestamp::parse("2024-01-15T08:00:01Z").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serde_roundtrip_is_canonical() {
        let ts = Timestamp::parse("2024-01-15T13:00:00+05:00").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-01-15T08:00:00Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn test_deserialize_rejects_non_string() {
        assert!(serde_json::from_str::<Timestamp>("1705305600").is_err());
    }
}
