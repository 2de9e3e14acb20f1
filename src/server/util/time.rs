//! Timestamp rendering.
//!
//! Timestamps are stored as naive UTC values. Over HTTP they are rendered as RFC 3339 with
//! millisecond precision and a `Z` designator, on the summary image in a shorter
//! human-readable form.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

/// Current time truncated to the precision timestamps are reported with.
pub fn refresh_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Renders a stored timestamp as ISO 8601, e.g. `2025-10-22T18:04:05.123Z`.
pub fn to_iso8601(timestamp: NaiveDateTime) -> String {
    timestamp
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders a timestamp for people, e.g. `2025-10-22 18:04:05 UTC`.
pub fn to_display(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
