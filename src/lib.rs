//! # Logsink
//!
//! A leveled, asynchronously flushable logging sink with a guaranteed
//! flush-on-shutdown contract.
//!
//! ## Features
//!
//! - **Non-Blocking Emit**: records are enqueued, never written on the caller's thread
//! - **Ordered Writes**: a single serialized write queue preserves emit order
//! - **Flush On Shutdown**: one awaited `flush` makes every accepted record durable
//! - **Silent Mode**: a silent sink opens no file and leaves no trace on disk

pub mod core;
pub mod destinations;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Destination, LogRecord, Result, Severity, Sink, SinkConfig, SinkError,
        DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::destinations::{FileDestination, MemoryDestination, MemoryHandle};
}

pub use crate::core::{
    Destination, LogRecord, Result, Severity, Sink, SinkConfig, SinkError,
    DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use crate::destinations::{FileDestination, MemoryDestination, MemoryHandle};
