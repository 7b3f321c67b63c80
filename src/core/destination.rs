//! Destination trait for sink output

use super::error::Result;

/// A durable line-oriented output owned exclusively by one sink.
///
/// The sink's worker is the single caller, so implementations do not
/// need their own locking. `write_line` receives the rendered line
/// without a trailing newline and may buffer; `flush` must make every
/// previously written line durable before returning.
pub trait Destination: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
