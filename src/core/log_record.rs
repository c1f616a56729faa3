//! Log record handed to sinks

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};

/// One finished log message.
///
/// Records borrow from the dispatch call that built them and are only valid
/// for the duration of [`Sink::emit`](super::Sink::emit). A sink that needs
/// to keep the data must copy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    /// Wall-clock time taken when the logging call was entered
    pub timestamp: DateTime<Utc>,
    /// OS identifier of the emitting thread
    pub thread_id: u64,
    pub module: &'a str,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(
        level: LogLevel,
        timestamp: DateTime<Utc>,
        thread_id: u64,
        module: &'a str,
        message: &'a str,
    ) -> Self {
        Self {
            level,
            timestamp,
            thread_id,
            module,
            message,
        }
    }
}
