use chrono::{DateTime, Utc};

/// Wire format of every timestamp in API responses.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a UTC timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
