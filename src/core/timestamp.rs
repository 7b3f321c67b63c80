//! Timestamp formatting for the line format
//!
//! The persisted line format carries an ISO 8601 instant with millisecond
//! precision (`2025-01-08T10:30:45.123Z`). Downstream log-reading tools
//! depend on this shape being stable.

use chrono::{DateTime, Utc};

/// Format an instant as an ISO 8601 string with millisecond precision.
#[must_use]
pub fn format_iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
