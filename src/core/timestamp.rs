//! Timestamp formatting utilities
//!
//! The console uses either a full local date-time with UTC offset or a bare
//! wall-clock time; the debug file uses the comma-millisecond layout familiar
//! from classic log files.

use chrono::{DateTime, TimeZone};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use pytr_utils::core::TimestampFormat;
/// use chrono::Local;
///
/// let stamp = TimestampFormat::TimeOnly.format(&Local::now());
/// assert_eq!(stamp.len(), "12:34:56".len());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45+0100`
    DateTimeZone,

    /// `10:30:45`
    #[default]
    TimeOnly,

    /// `2025-01-08 10:30:45,123`
    ///
    /// Layout of the debug log file.
    Millis,
}

impl TimestampFormat {
    /// strftime pattern behind this format
    pub fn pattern(&self) -> &'static str {
        match self {
            TimestampFormat::DateTimeZone => "%Y-%m-%d %H:%M:%S%z",
            TimestampFormat::TimeOnly => "%H:%M:%S",
            TimestampFormat::Millis => "%Y-%m-%d %H:%M:%S,%3f",
        }
    }

    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        datetime.format(self.pattern()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn fixed_datetime() -> DateTime<FixedOffset> {
        // 2025-01-08 10:30:45.123456 +01:00
        FixedOffset::east_opt(3600)
            .expect("valid offset")
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_date_time_zone_format() {
        let result = TimestampFormat::DateTimeZone.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45+0100");
    }

    #[test]
    fn test_time_only_format() {
        let result = TimestampFormat::TimeOnly.format(&fixed_datetime());
        assert_eq!(result, "10:30:45");
    }

    #[test]
    fn test_millis_format() {
        let result = TimestampFormat::Millis.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45,123");
    }

    #[test]
    fn test_utc_offset_renders_as_zeroes() {
        let utc = fixed_datetime().with_timezone(&Utc);
        assert_eq!(
            TimestampFormat::DateTimeZone.format(&utc),
            "2025-01-08 09:30:45+0000"
        );
    }
}
