//! Timestamp formatting utilities
//!
//! Both engines stamp records with `chrono::Utc::now()` and render the time
//! through one of these formats.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Standardized timestamp format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    ///
    /// Default for the record engine.
    #[default]
    Iso8601,

    /// RFC 3339 with nanoseconds: `2025-01-08T10:30:45.123456000Z`
    ///
    /// Used by the entry engine's JSON output.
    Rfc3339Nano,

    /// RFC 3339 with whole seconds: `2025-01-08T10:30:45Z`
    ///
    /// Used by the entry engine's text output.
    Rfc3339,
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logging_facade::core::TimestampFormat;
    /// use chrono::Utc;
    ///
    /// let timestamp = TimestampFormat::Iso8601.format(&Utc::now());
    /// assert!(timestamp.ends_with('Z'));
    /// ```
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::Rfc3339Nano => datetime.to_rfc3339_opts(SecondsFormat::Nanos, true),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_rfc3339_nano_format() {
        let result = TimestampFormat::Rfc3339Nano.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456000Z");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45Z");
    }

    #[test]
    fn test_default_is_iso8601() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Iso8601);
    }
}
