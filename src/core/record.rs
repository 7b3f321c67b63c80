//! Log record structure

use super::severity::Severity;
use super::timestamp::format_iso8601;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An accepted log record. Immutable after construction.
///
/// The timestamp is assigned when the record is built, which the sink
/// does at filtering time, not at eventual write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Severity,
    pub message: String,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a record always renders as exactly one line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: Severity, message: String) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: Self::sanitize_message(&message),
        }
    }

    /// Render the record in the persisted line format, without the
    /// trailing newline: `<ISO8601 timestamp> [<LEVEL>]: <message>`.
    #[must_use]
    pub fn format_line(&self) -> String {
        format!(
            "{} [{}]: {}",
            format_iso8601(&self.timestamp),
            self.level.to_str(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_timestamped_at_construction() {
        let before = Utc::now();
        let record = LogRecord::new(Severity::Info, "hello".to_string());
        let after = Utc::now();

        assert!(record.timestamp >= before);
        assert!(record.timestamp <= after);
    }

    #[test]
    fn test_format_line_shape() {
        let mut record = LogRecord::new(Severity::Debug, "x".to_string());
        record.timestamp = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");

        assert_eq!(record.format_line(), "2025-01-08T10:30:45.000Z [DEBUG]: x");
    }

    #[test]
    fn test_message_sanitized() {
        let record = LogRecord::new(
            Severity::Info,
            "User login\nERROR fake entry\tinjected\r".to_string(),
        );

        assert_eq!(record.message, "User login\\nERROR fake entry\\tinjected\\r");
        assert!(!record.format_line().contains('\n'));
    }

    #[test]
    fn test_serde_roundtrip() {
        let record = LogRecord::new(Severity::Debug, "payload".to_string());
        let json = serde_json::to_string(&record).expect("serialize");
        let back: LogRecord = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.level, record.level);
        assert_eq!(back.message, record.message);
        assert_eq!(back.timestamp, record.timestamp);
    }
}
