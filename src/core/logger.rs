//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::Result,
    formatter::{MessageBuffer, Rendered, DEFAULT_MAX_MESSAGE_LENGTH},
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    sink::Sink,
    thread_id::current_thread_id,
};
use crate::sinks::ConsoleSink;
use chrono::Utc;
use parking_lot::Mutex;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU8, Ordering};

/// State that only the dispatch lock may touch.
struct Shared {
    sink: Box<dyn Sink>,
    buffer: MessageBuffer,
}

/// Level filter, message formatter and sink behind one lock.
///
/// The threshold lives in an atomic so filtered calls never take the lock.
/// Everything else (sink, formatting buffer) is guarded by a single mutex that
/// is held across rendering and the sink call, so sinks see records one at a
/// time and never a spliced message.
///
/// The lock is held while the message arguments are formatted. A `Display`
/// impl or a sink that logs through the same `Logger` deadlocks.
///
/// # Example
///
/// ```
/// use ultralog::{Logger, LogLevel};
///
/// let logger = Logger::new();
/// logger.set_level(LogLevel::Debug);
/// logger.debug("cache", format_args!("{} entries evicted", 12));
/// ```
pub struct Logger {
    level: AtomicU8,
    shared: Mutex<Shared>,
    /// Counters for observability
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger at `Info` writing to the console.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(
            LogLevel::Info,
            DEFAULT_MAX_MESSAGE_LENGTH,
            Box::new(ConsoleSink::new()),
        )
    }

    /// Logger configured from a [`LoggerConfig`], writing to the console.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::with_parts(
            config.level,
            config.max_message_length,
            Box::new(ConsoleSink::new()),
        )
    }

    fn with_parts(level: LogLevel, max_message_length: usize, sink: Box<dyn Sink>) -> Self {
        Self {
            level: AtomicU8::new(level.rank()),
            shared: Mutex::new(Shared {
                sink,
                buffer: MessageBuffer::new(max_message_length),
            }),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Replace the threshold.
    ///
    /// Concurrent callers may observe the change with a short delay.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }

    /// Current threshold.
    pub fn level(&self) -> LogLevel {
        LogLevel::from_rank(self.level.load(Ordering::Relaxed))
    }

    /// Whether a record at `level` would reach the sink.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.is_emitted_at(self.level())
    }

    /// Set the maximum rendered message length in bytes.
    ///
    /// Values below [`MIN_MESSAGE_LENGTH`](super::formatter::MIN_MESSAGE_LENGTH)
    /// are raised to it. Setting the current value again does nothing.
    pub fn set_max_message_length(&self, length: usize) {
        let mut shared = self.shared.lock();
        if shared.buffer.resize(length) {
            self.metrics.record_buffer_allocation();
        }
    }

    pub fn max_message_length(&self) -> usize {
        self.shared.lock().buffer.max_len()
    }

    /// Replace the active sink. `None` restores the console sink.
    ///
    /// The previous sink is flushed and dropped outside the lock.
    pub fn set_sink(&self, sink: Option<Box<dyn Sink>>) {
        let sink = sink.unwrap_or_else(|| Box::new(ConsoleSink::new()));
        let mut previous = {
            let mut shared = self.shared.lock();
            std::mem::replace(&mut shared.sink, sink)
        };
        if let Err(e) = previous.flush() {
            eprintln!(
                "[LOGGER ERROR] Flushing replaced sink '{}' failed: {}",
                previous.name(),
                e
            );
        }
    }

    /// Restore the console sink.
    pub fn reset_sink(&self) {
        self.set_sink(None);
    }

    /// Name of the active sink.
    pub fn sink_name(&self) -> String {
        self.shared.lock().sink.name().to_string()
    }

    /// Log a message at `level`.
    ///
    /// `Silent` is a threshold only; records at that level are discarded.
    /// `args` is any `format_args!` value, so other variadic macros can
    /// forward their arguments here unchanged.
    ///
    /// `args` is formatted while the dispatch lock is held, so its `Display`
    /// impls must not log through this `Logger`; doing so deadlocks. A
    /// panicking or failing impl yields [`FORMAT_ERROR_MESSAGE`] instead.
    ///
    /// [`FORMAT_ERROR_MESSAGE`]: crate::FORMAT_ERROR_MESSAGE
    pub fn log(&self, level: LogLevel, module: &str, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.dispatch(level, module, args);
    }

    pub fn fatal(&self, module: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Fatal, module, args);
    }

    pub fn error(&self, module: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, module, args);
    }

    pub fn warning(&self, module: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warning, module, args);
    }

    pub fn info(&self, module: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, module, args);
    }

    pub fn debug(&self, module: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, module, args);
    }

    pub fn trace(&self, module: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, module, args);
    }

    /// Timestamp, lock, render and hand one record to the sink.
    ///
    /// Sink errors and panics are reported on stderr and counted; they never
    /// reach the caller.
    fn dispatch(&self, level: LogLevel, module: &str, args: fmt::Arguments<'_>) {
        // Taken before the lock so waiting does not skew the timestamp.
        let timestamp = Utc::now();
        let thread_id = current_thread_id();

        let mut guard = self.shared.lock();
        let Shared { sink, buffer } = &mut *guard;

        if buffer.ensure_allocated() {
            self.metrics.record_buffer_allocation();
        }

        let (message, outcome) = buffer.render(args);
        match outcome {
            Rendered::Complete => {}
            Rendered::Truncated => {
                self.metrics.record_truncated();
            }
            Rendered::Failed => {
                self.metrics.record_format_failure();
            }
        }

        let record = LogRecord::new(level, timestamp, thread_id, module, message);
        let emit_result = panic::catch_unwind(AssertUnwindSafe(|| sink.emit(&record)));

        match emit_result {
            Ok(Ok(())) => {
                self.metrics.record_dispatched();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                self.metrics.record_sink_failure();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}. Record dropped.",
                    sink.name(),
                    panic_msg
                );
                self.metrics.record_sink_failure();
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.shared.lock().sink.flush()
    }

    /// Flush the sink and release the formatting buffer.
    ///
    /// The logger stays usable; the next record allocates a fresh buffer.
    pub fn shutdown(&self) -> Result<()> {
        let mut shared = self.shared.lock();
        shared.buffer.release();
        shared.sink.flush()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let shared = self.shared.get_mut();
        if let Err(e) = shared.sink.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let failed = self.metrics.sink_failures();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed records (failure rate: {:.2}%)",
                failed,
                self.metrics.sink_failure_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use ultralog::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .max_message_length(512)
///     .sink(ConsoleSink::new().with_utc(true))
///     .build();
/// assert_eq!(logger.max_message_length(), 512);
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    max_message_length: usize,
    sink: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            sink: None,
        }
    }

    /// Start from the settings in `config`
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new()
            .level(config.level)
            .max_message_length(config.max_message_length)
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the maximum message length (floor applies)
    #[must_use = "builder methods return a new value"]
    pub fn max_message_length(mut self, length: usize) -> Self {
        self.max_message_length = length;
        self
    }

    /// Set the sink. Without one the console sink is used.
    ///
    /// Closures can be passed directly. A `Box<dyn Sink>`, such as the result
    /// of [`sink_fn`](crate::sink_fn), goes through [`boxed_sink`](Self::boxed_sink).
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set an already boxed sink
    #[must_use = "builder methods return a new value"]
    pub fn boxed_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::new()));
        Logger::with_parts(self.level, self.max_message_length, sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
