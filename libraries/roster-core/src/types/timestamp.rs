/// Timestamp formatting for transport
use crate::error::{CoreError, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Render Unix seconds as an RFC 3339 string in UTC (`2024-01-15T09:30:00Z`)
pub fn format_unix_timestamp(secs: i64) -> Result<String> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .ok_or_else(|| CoreError::decode(format!("timestamp out of range: {}", secs)))
}

/// Current time as an RFC 3339 string in UTC
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
