//! Logging macros for ergonomic record formatting.
//!
//! These macros provide a convenient interface for emitting records with
//! automatic string formatting, similar to `println!` and `format!`.
//! They take the sink as an explicit first argument; there is no global
//! sink.
//!
//! # Examples
//!
//! ```
//! use logsink::prelude::*;
//! use logsink::info;
//!
//! let sink = Sink::with_destination(Severity::Info, Box::new(MemoryDestination::new()));
//!
//! // Basic emission
//! info!(sink, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(sink, "Server listening on port {}", port);
//! ```

/// Emit a record with automatic formatting.
///
/// # Examples
///
/// ```
/// # use logsink::prelude::*;
/// # let sink = Sink::with_destination(Severity::Debug, Box::new(MemoryDestination::new()));
/// use logsink::emit;
/// emit!(sink, Severity::Info, "Simple message");
/// emit!(sink, Severity::Debug, "Request took {}ms", 12);
/// ```
#[macro_export]
macro_rules! emit {
    ($sink:expr, $level:expr, $($arg:tt)+) => {
        $sink.emit($level, format!($($arg)+))
    };
}

/// Emit an info-level record.
///
/// # Examples
///
/// ```
/// # use logsink::prelude::*;
/// # let sink = Sink::with_destination(Severity::Info, Box::new(MemoryDestination::new()));
/// use logsink::info;
/// info!(sink, "Application started");
/// info!(sink, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($sink:expr, $($arg:tt)+) => {
        $crate::emit!($sink, $crate::Severity::Info, $($arg)+)
    };
}

/// Emit a debug-level record.
///
/// # Examples
///
/// ```
/// # use logsink::prelude::*;
/// # let sink = Sink::with_destination(Severity::Debug, Box::new(MemoryDestination::new()));
/// use logsink::debug;
/// debug!(sink, "Debug information");
/// debug!(sink, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($sink:expr, $($arg:tt)+) => {
        $crate::emit!($sink, $crate::Severity::Debug, $($arg)+)
    };
}
