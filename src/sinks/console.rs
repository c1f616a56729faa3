//! Console sink implementation
//!
//! Writes one line per record:
//!
//! ```text
//! 2024-01-01 00:00:00.500 (E) [42] net: failed: 7
//! ```
//!
//! Timestamp in local time (or UTC on request) with milliseconds, the
//! single-letter level code, the OS thread id, the module and the message.

use crate::core::{format_console_timestamp, LogLevel, LogRecord, LoggerError, Result, Sink};
use chrono::{DateTime, Local, Utc};
use std::io::{self, Write};

/// Default sink: formatted lines on standard output.
pub struct ConsoleSink {
    use_colors: bool,
    use_utc: bool,
    /// Replaces stdout when set
    writer: Option<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: false,
            use_utc: false,
            writer: None,
        }
    }

    /// Colour the level code. Needs the `console` feature; without it the
    /// setting is ignored.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Render timestamps in UTC instead of local time.
    #[must_use]
    pub fn with_utc(mut self, use_utc: bool) -> Self {
        self.use_utc = use_utc;
        self
    }

    /// Write lines to `writer` instead of standard output.
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Build the full output line for one record, trailing newline included.
    pub fn format_line(
        &self,
        level: LogLevel,
        timestamp: &DateTime<Utc>,
        thread_id: u64,
        module: &str,
        message: &str,
    ) -> String {
        let timestamp_str = if self.use_utc {
            format_console_timestamp(timestamp)
        } else {
            format_console_timestamp(&timestamp.with_timezone(&Local))
        };

        format!(
            "{} ({}) [{}] {}: {}\n",
            timestamp_str,
            self.level_code(level),
            thread_id,
            module,
            message
        )
    }

    #[cfg(feature = "console")]
    fn level_code(&self, level: LogLevel) -> String {
        use colored::Colorize;

        let code = level.code().to_string();
        if self.use_colors {
            code.color(level.color_code()).to_string()
        } else {
            code
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_code(&self, level: LogLevel) -> String {
        level.code().to_string()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn emit(&mut self, record: &LogRecord<'_>) -> Result<()> {
        let line = self.format_line(
            record.level,
            &record.timestamp,
            record.thread_id,
            record.module,
            record.message,
        );

        // One write per line keeps lines whole when other code shares stdout.
        let written = match self.writer.as_mut() {
            Some(writer) => writer.write_all(line.as_bytes()),
            None => io::stdout().lock().write_all(line.as_bytes()),
        };
        written.map_err(|e| LoggerError::io_operation("writing console line", e))
    }

    fn flush(&mut self) -> Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush()?,
            None => io::stdout().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
