//! Timestamp formatting for printed records

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layouts a printer can put in front of a record
///
/// # Examples
///
/// ```
/// use rust_logger_facade::core::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Iso8601.format(&Utc::now());
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local wall clock, `2025/01/08 10:30:45`
    #[default]
    Std,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, rendered in UTC
    Custom(String),
}

impl TimestampFormat {
    pub const STD_LAYOUT: &'static str = "%Y/%m/%d %H:%M:%S";

    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Std => datetime
                .with_timezone(&Local)
                .format(Self::STD_LAYOUT)
                .to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}
