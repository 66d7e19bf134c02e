//! Timestamp formatting shared by responses and the access log.
//!
//! All timestamps are rendered as RFC 3339 UTC with millisecond precision,
//! e.g. `2026-10-18T09:30:00.000Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Formats a timestamp with millisecond precision and a `Z` suffix.
pub fn format_millis(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for `#[serde(serialize_with = "...")]`.
pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_millis(at))
}
