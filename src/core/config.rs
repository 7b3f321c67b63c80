//! Sink configuration

use super::severity::Severity;
use std::path::PathBuf;

/// Configuration a sink is constructed from.
///
/// Owned by the caller and immutable for the sink's lifetime;
/// reconfiguration means constructing a new sink. The crate does not
/// read environment variables itself, the hosting application resolves
/// its own verbosity selector and destination path into this value
/// (see [`Severity::from_selector`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    pub level: Severity,
    pub destination: PathBuf,
}

impl SinkConfig {
    pub fn new(level: Severity, destination: impl Into<PathBuf>) -> Self {
        Self {
            level,
            destination: destination.into(),
        }
    }
}
