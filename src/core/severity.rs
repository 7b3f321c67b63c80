//! Severity definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verbosity-ordered severity: `Silent < Info < Debug`.
///
/// A sink configured at a given severity emits every record at that
/// severity and below, so `Info` emits info records only, `Debug` emits
/// info and debug records, and `Silent` emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    #[default]
    Silent = 0,
    Info = 1,
    Debug = 2,
}

impl Severity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Silent => "SILENT",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Whether a sink configured at `self` emits a record at `record`.
    ///
    /// Records carry `Info` or `Debug`; a `Silent` record level is never
    /// emitted regardless of the threshold.
    pub fn allows(&self, record: Severity) -> bool {
        record != Severity::Silent && record <= *self
    }

    /// Resolve the three-valued numeric verbosity selector: `"0"` is
    /// silent, `"1"` is info, `"2"` is debug.
    ///
    /// Anything unrecognized resolves to `Silent` rather than an error,
    /// so a bad selector can never block primary program logic.
    pub fn from_selector(s: &str) -> Self {
        match s.trim() {
            "1" => Severity::Info,
            "2" => Severity::Debug,
            _ => Severity::Silent,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SILENT" => Ok(Severity::Silent),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
