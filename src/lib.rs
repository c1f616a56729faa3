//! # Ultralog
//!
//! A small process-wide logging facility: leveled messages tagged with a
//! module name, filtered by a threshold, rendered into a bounded buffer and
//! handed to one replaceable sink.
//!
//! ## Features
//!
//! - **Cheap filtering**: suppressed calls never format or lock
//! - **Bounded messages**: long output is cut and marked with `[...]`
//! - **Pluggable sink**: any [`Sink`] or closure; console output by default
//! - **Thread safe**: records reach the sink one at a time
//!
//! ```
//! use ultralog::{error, info, LogLevel};
//!
//! ultralog::set_level(LogLevel::Debug);
//! info!("main", "listening on port {}", 8080);
//! error!("net", "failed: {}", 7);
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        sink_fn, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, Result, Sink,
    };
    pub use crate::sinks::ConsoleSink;
}

pub use crate::core::{
    current_thread_id, format_console_timestamp, sink_fn, LogLevel, LogRecord, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, MessageBuffer, Rendered, Result,
    Sink, CONSOLE_TIMESTAMP_FORMAT, DEFAULT_MAX_MESSAGE_LENGTH, FORMAT_ERROR_MESSAGE,
    MIN_MESSAGE_LENGTH, TRUNCATION_MARKER,
};
pub use global::{
    enabled, flush, init, init_from_env, level, log, log_debug, log_error, log_fatal, log_info,
    log_trace, log_warning, logger, max_message_length, set_level, set_max_message_length,
    set_sink, shutdown,
};
pub use sinks::ConsoleSink;
