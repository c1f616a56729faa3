//! Process-wide logger
//!
//! One [`Logger`] shared by the whole process, created with defaults on first
//! use (threshold `Info`, console sink, 2048-byte messages) unless
//! [`init`] installed another one first. Every function here forwards to
//! that instance.

use crate::core::{LogLevel, Logger, LoggerConfig, LoggerError, Result, Sink};
use std::fmt;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Install `logger` as the process-wide logger.
///
/// Fails with [`LoggerError::AlreadyInitialized`] once any logging or
/// configuration call has created the default instance.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Install a logger configured from `ULOG_LEVEL` / `ULOG_MAX_MESSAGE_LENGTH`.
pub fn init_from_env() -> Result<()> {
    let config = LoggerConfig::from_env()?;
    init(Logger::from_config(&config))
}

pub fn set_level(level: LogLevel) {
    logger().set_level(level);
}

pub fn level() -> LogLevel {
    logger().level()
}

pub fn enabled(level: LogLevel) -> bool {
    logger().enabled(level)
}

pub fn set_max_message_length(length: usize) {
    logger().set_max_message_length(length);
}

pub fn max_message_length() -> usize {
    logger().max_message_length()
}

/// Replace the sink; `None` restores the console sink.
pub fn set_sink(sink: Option<Box<dyn Sink>>) {
    logger().set_sink(sink);
}

pub fn log_fatal(module: &str, args: fmt::Arguments<'_>) {
    logger().fatal(module, args);
}

pub fn log_error(module: &str, args: fmt::Arguments<'_>) {
    logger().error(module, args);
}

pub fn log_warning(module: &str, args: fmt::Arguments<'_>) {
    logger().warning(module, args);
}

pub fn log_info(module: &str, args: fmt::Arguments<'_>) {
    logger().info(module, args);
}

pub fn log_debug(module: &str, args: fmt::Arguments<'_>) {
    logger().debug(module, args);
}

pub fn log_trace(module: &str, args: fmt::Arguments<'_>) {
    logger().trace(module, args);
}

/// Log at `level`; `Silent` records are discarded.
pub fn log(level: LogLevel, module: &str, args: fmt::Arguments<'_>) {
    logger().log(level, module, args);
}

pub fn flush() -> Result<()> {
    logger().flush()
}

/// Flush the sink and release the formatting buffer.
pub fn shutdown() -> Result<()> {
    logger().shutdown()
}
