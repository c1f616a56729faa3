//! Sink trait for log output destinations

use super::{error::Result, log_level::LogLevel, log_record::LogRecord};
use chrono::{DateTime, Utc};

/// Final destination of log records.
///
/// The logger calls `emit` while holding its dispatch lock, so a sink sees
/// one record at a time and never needs to be reentrant. A sink must not log
/// through the same [`Logger`](crate::Logger) from inside `emit`; doing so
/// deadlocks on that lock.
///
/// Any closure taking `(level, timestamp, module, message)` is a sink; see
/// [`sink_fn`].
pub trait Sink: Send {
    fn emit(&mut self, record: &LogRecord<'_>) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

impl<F> Sink for F
where
    F: FnMut(LogLevel, DateTime<Utc>, &str, &str) + Send,
{
    fn emit(&mut self, record: &LogRecord<'_>) -> Result<()> {
        self(record.level, record.timestamp, record.module, record.message);
        Ok(())
    }

    fn name(&self) -> &str {
        "callback"
    }
}

/// Box a closure as a sink.
///
/// The result is a `Box<dyn Sink>`, which is what
/// [`Logger::set_sink`](crate::Logger::set_sink) and
/// [`LoggerBuilder::boxed_sink`](crate::LoggerBuilder::boxed_sink) take.
/// [`LoggerBuilder::sink`](crate::LoggerBuilder::sink) wants an unboxed sink;
/// pass the closure itself there instead.
///
/// ```
/// use ultralog::{sink_fn, Logger};
///
/// let logger = Logger::new();
/// logger.set_sink(Some(sink_fn(|level, _timestamp, module, message| {
///     eprintln!("{} {}: {}", level, module, message);
/// })));
/// assert_eq!(logger.sink_name(), "callback");
///
/// let built = Logger::builder()
///     .boxed_sink(sink_fn(|_level, _timestamp, _module, _message| {}))
///     .build();
/// assert_eq!(built.sink_name(), "callback");
/// ```
pub fn sink_fn<F>(f: F) -> Box<dyn Sink>
where
    F: FnMut(LogLevel, DateTime<Utc>, &str, &str) + Send + 'static,
{
    Box::new(f)
}
