//! In-memory destination
//!
//! Collects lines into a shared buffer so ordering and flush-completion
//! guarantees can be asserted without touching the filesystem.

use crate::core::{Destination, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct Shared {
    lines: Vec<String>,
    flush_count: u64,
}

/// Destination writing into a shared in-memory buffer.
pub struct MemoryDestination {
    shared: Arc<Mutex<Shared>>,
}

/// Cloneable view into a [`MemoryDestination`]'s buffer.
///
/// Remains valid after the destination has been handed to a sink.
#[derive(Clone)]
pub struct MemoryHandle {
    shared: Arc<Mutex<Shared>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::default())),
        }
    }

    pub fn handle(&self) -> MemoryHandle {
        MemoryHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Default for MemoryDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl Destination for MemoryDestination {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.shared.lock().lines.push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.shared.lock().flush_count += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

impl MemoryHandle {
    /// Snapshot of the written lines, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.shared.lock().lines.clone()
    }

    /// Number of destination-level flushes observed.
    pub fn flush_count(&self) -> u64 {
        self.shared.lock().flush_count
    }
}
