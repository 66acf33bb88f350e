//! Wire format for timestamps.
//!
//! All timestamps leave the service as RFC 3339 UTC strings with microsecond
//! precision and a literal `Z`, e.g. `2025-01-01T12:00:00.000000Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Formats a UTC instant for API responses.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Serde adapter for `#[serde(serialize_with = "...")]`.
pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}
