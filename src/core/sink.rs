//! Level-filtered sink implementation

use super::{
    config::SinkConfig,
    destination::Destination,
    record::LogRecord,
    severity::Severity,
};
use crate::destinations::FileDestination;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tokio::sync::oneshot;

/// Default shutdown timeout when a sink is dropped without [`Sink::flush`]
///
/// Dropping a sink without flushing is a caller error (records buffered in
/// the destination may be lost); the drop path still drains the queue
/// best-effort, bounded by this timeout.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

enum Command {
    Write(String),
    Flush(oneshot::Sender<()>),
}

/// A leveled sink writing records to a single destination through a
/// serialized FIFO write queue.
///
/// `emit` is a synchronous, non-blocking enqueue; [`Sink::flush`] is the
/// one suspension point and the one shutdown primitive. The hosting
/// application's shutdown path must invoke and await it before process
/// exit, after which the sink is closed for good.
///
/// # Example
///
/// ```no_run
/// use logsink::{Severity, Sink, SinkConfig};
///
/// # async fn example() {
/// let sink = Sink::create(SinkConfig::new(Severity::Info, "logs/app.log"));
///
/// sink.emit(Severity::Info, "server started");
/// sink.emit(Severity::Debug, "filtered out at info threshold");
///
/// sink.flush().await;
/// # }
/// ```
pub struct Sink {
    level: Severity,
    closed: AtomicBool,
    sender: Option<Sender<Command>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Sink {
    /// Create a sink from its configuration.
    ///
    /// A `Silent` configuration spawns no worker and opens no file, so
    /// silent mode has zero I/O side effects and cannot create an empty
    /// destination file. Otherwise the destination file is opened lazily
    /// on the first accepted record; an unwritable path surfaces later
    /// as a recovered write failure, never as a construction failure.
    #[must_use]
    pub fn create(config: SinkConfig) -> Self {
        if config.level == Severity::Silent {
            return Self::silent();
        }
        Self::with_destination(
            config.level,
            Box::new(FileDestination::new(config.destination)),
        )
    }

    /// Create a sink over an explicit destination.
    ///
    /// This is the seam `create` goes through and the way tests verify
    /// ordering and flush-completion without touching the filesystem.
    /// A `Silent` level discards the destination unopened.
    #[must_use]
    pub fn with_destination(level: Severity, destination: Box<dyn Destination>) -> Self {
        if level == Severity::Silent {
            return Self::silent();
        }

        let (sender, receiver) = unbounded();
        let handle = thread::spawn(move || Self::run_worker(destination, receiver));

        Self {
            level,
            closed: AtomicBool::new(false),
            sender: Some(sender),
            worker: Some(handle),
        }
    }

    fn silent() -> Self {
        Self {
            level: Severity::Silent,
            closed: AtomicBool::new(false),
            sender: None,
            worker: None,
        }
    }

    /// Worker loop: single consumer of the FIFO queue, exclusive owner
    /// of the destination. Exits after acknowledging a flush command or
    /// when every sender is gone.
    fn run_worker(mut destination: Box<dyn Destination>, receiver: Receiver<Command>) {
        loop {
            match receiver.recv() {
                Ok(Command::Write(line)) => {
                    if let Err(e) = destination.write_line(&line) {
                        eprintln!(
                            "[SINK ERROR] write to {} destination failed: {}",
                            destination.name(),
                            e
                        );
                    }
                }
                Ok(Command::Flush(ack)) => {
                    if let Err(e) = destination.flush() {
                        eprintln!(
                            "[SINK ERROR] flush of {} destination failed: {}",
                            destination.name(),
                            e
                        );
                    }
                    // Best-effort completion: the ack resolves whether or
                    // not every record reached the destination.
                    let _ = ack.send(());
                    break;
                }
                Err(_) => {
                    // Senders dropped without an explicit flush. The queue
                    // is already drained; make buffered lines durable.
                    if let Err(e) = destination.flush() {
                        eprintln!(
                            "[SINK ERROR] flush of {} destination failed: {}",
                            destination.name(),
                            e
                        );
                    }
                    break;
                }
            }
        }
    }

    /// Emit a record. Fire-and-forget: never suspends, never blocks on
    /// I/O, never surfaces an error.
    ///
    /// The record is dropped if the sink is closed or the level is more
    /// verbose than the configured threshold. Accepted records are
    /// timestamped here, at filtering time, and queued for write in
    /// call order.
    pub fn emit(&self, level: Severity, message: impl Into<String>) {
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        if !self.level.allows(level) {
            return;
        }
        let Some(sender) = self.sender.as_ref() else {
            return;
        };

        let record = LogRecord::new(level, message.into());
        // A send error means the worker is gone (shutdown race); the
        // record is silently dropped rather than surfaced to the caller.
        let _ = sender.send(Command::Write(record.format_line()));
    }

    /// Flush every previously accepted record to the destination and
    /// close the sink.
    ///
    /// Resolves once the worker has handed all queued lines to the
    /// destination and the destination's own flush has run, even when
    /// writes failed (durability is then not guaranteed for the affected
    /// records). The first call transitions the sink to its terminal
    /// closed state; later calls, including concurrent ones, resolve
    /// immediately. Subsequent `emit` calls are no-ops.
    pub async fn flush(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        let Some(sender) = self.sender.as_ref() else {
            return;
        };

        let (ack_tx, ack_rx) = oneshot::channel();
        if sender.send(Command::Flush(ack_tx)).is_ok() {
            // The worker acks after draining the queue; a recv error can
            // only mean the worker died, in which case there is nothing
            // left to wait for.
            let _ = ack_rx.await;
        }
    }

    /// Configured severity threshold.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Whether the sink has reached its terminal closed state.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::Release);

        // Disconnecting the channel signals the worker to drain whatever
        // is still queued and exit.
        drop(self.sender.take());

        if let Some(handle) = self.worker.take() {
            let start = std::time::Instant::now();

            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!("[SINK ERROR] worker thread panicked during shutdown: {:?}", e);
                    }
                    break;
                }

                if start.elapsed() >= DEFAULT_SHUTDOWN_TIMEOUT {
                    eprintln!(
                        "[SINK WARNING] worker thread did not finish within {:?} timeout. \
                         Some records may be lost.",
                        DEFAULT_SHUTDOWN_TIMEOUT
                    );
                    break;
                }

                // Small sleep to avoid busy-waiting
                thread::sleep(Duration::from_millis(10));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destinations::MemoryDestination;

    fn memory_sink(level: Severity) -> (Sink, crate::destinations::MemoryHandle) {
        let destination = MemoryDestination::new();
        let handle = destination.handle();
        (Sink::with_destination(level, Box::new(destination)), handle)
    }

    #[tokio::test]
    async fn test_emit_then_flush_writes_in_order() {
        let (sink, handle) = memory_sink(Severity::Debug);

        sink.emit(Severity::Info, "first");
        sink.emit(Severity::Debug, "second");
        sink.emit(Severity::Info, "third");
        sink.flush().await;

        let lines = handle.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("[INFO]: first"));
        assert!(lines[1].ends_with("[DEBUG]: second"));
        assert!(lines[2].ends_with("[INFO]: third"));
    }

    #[tokio::test]
    async fn test_threshold_filters_verbose_records() {
        let (sink, handle) = memory_sink(Severity::Info);

        sink.emit(Severity::Debug, "hidden");
        sink.emit(Severity::Info, "shown");
        sink.flush().await;

        let lines = handle.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[INFO]: shown"));
    }

    #[test]
    fn test_silent_sink_has_no_worker_and_resolves_immediately() {
        let sink = Sink::create(SinkConfig::new(Severity::Silent, "logs/never.log"));

        sink.emit(Severity::Info, "dropped");
        // No runtime needed: a silent flush resolves without suspending
        tokio_test::block_on(sink.flush());

        assert!(sink.is_closed());
    }

    #[tokio::test]
    async fn test_with_destination_discards_destination_when_silent() {
        let destination = MemoryDestination::new();
        let handle = destination.handle();
        let sink = Sink::with_destination(Severity::Silent, Box::new(destination));

        sink.emit(Severity::Info, "dropped");
        sink.flush().await;

        assert!(handle.lines().is_empty());
        assert_eq!(handle.flush_count(), 0);
    }

    #[tokio::test]
    async fn test_flush_is_idempotent() {
        let (sink, handle) = memory_sink(Severity::Info);

        sink.emit(Severity::Info, "once");
        sink.flush().await;
        sink.flush().await;

        assert_eq!(handle.lines().len(), 1);
        assert_eq!(handle.flush_count(), 1);
    }

    #[tokio::test]
    async fn test_emit_after_flush_is_noop() {
        let (sink, handle) = memory_sink(Severity::Debug);

        sink.emit(Severity::Info, "kept");
        sink.flush().await;
        sink.emit(Severity::Info, "discarded");
        sink.flush().await;

        let lines = handle.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[INFO]: kept"));
    }

    #[tokio::test]
    async fn test_concurrent_emitters_all_land() {
        let (sink, handle) = memory_sink(Severity::Debug);
        let sink = std::sync::Arc::new(sink);

        let mut joins = Vec::new();
        for t in 0..4 {
            let sink = std::sync::Arc::clone(&sink);
            joins.push(thread::spawn(move || {
                for i in 0..25 {
                    sink.emit(Severity::Info, format!("worker {} message {}", t, i));
                }
            }));
        }
        for join in joins {
            join.join().expect("emitter thread");
        }

        sink.flush().await;

        let lines = handle.lines();
        assert_eq!(lines.len(), 100);

        // Per-emitter order is preserved by the single FIFO queue
        for t in 0..4 {
            let marker = format!("worker {} message ", t);
            let seq: Vec<&String> = lines.iter().filter(|l| l.contains(&marker)).collect();
            assert_eq!(seq.len(), 25);
            for (i, line) in seq.iter().enumerate() {
                assert!(line.ends_with(&format!("worker {} message {}", t, i)));
            }
        }
    }

    #[test]
    fn test_drop_without_flush_drains_queue() {
        let destination = MemoryDestination::new();
        let handle = destination.handle();

        {
            let sink = Sink::with_destination(Severity::Info, Box::new(destination));
            sink.emit(Severity::Info, "buffered");
        }

        assert_eq!(handle.lines().len(), 1);
        assert_eq!(handle.flush_count(), 1);
    }

    #[test]
    fn test_level_accessor() {
        let (sink, _handle) = memory_sink(Severity::Debug);
        assert_eq!(sink.level(), Severity::Debug);
        assert!(!sink.is_closed());
        tokio_test::block_on(sink.flush());
        assert!(sink.is_closed());
    }
}
