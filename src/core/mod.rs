//! Core logger types and traits

pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod thread_id;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use formatter::{
    MessageBuffer, Rendered, DEFAULT_MAX_MESSAGE_LENGTH, FORMAT_ERROR_MESSAGE,
    MIN_MESSAGE_LENGTH, TRUNCATION_MARKER,
};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use sink::{sink_fn, Sink};
pub use thread_id::current_thread_id;
pub use timestamp::{format_console_timestamp, CONSOLE_TIMESTAMP_FORMAT};
