//! Core sink types and traits

pub mod config;
pub mod destination;
pub mod error;
pub mod record;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use config::SinkConfig;
pub use destination::Destination;
pub use error::{Result, SinkError};
pub use record::LogRecord;
pub use severity::Severity;
pub use sink::{Sink, DEFAULT_SHUTDOWN_TIMEOUT};
