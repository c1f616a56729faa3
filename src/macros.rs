//! Logging macros for ergonomic log message formatting.
//!
//! Each macro checks the threshold before the arguments are touched, so a
//! suppressed call costs one atomic load. Messages use `format!` syntax.
//! The process-wide logger is the default target; prefix the arguments with
//! `target: <logger>,` to log through a specific [`Logger`](crate::Logger).
//!
//! Arguments are formatted under the logger's dispatch lock. A `Display`
//! impl that itself logs through the same logger deadlocks.
//!
//! # Examples
//!
//! ```
//! use ultralog::{info, warning, Logger};
//!
//! // Process-wide logger
//! info!("server", "listening on port {}", 8080);
//!
//! // Explicit logger
//! let logger = Logger::new();
//! warning!(target: logger, "disk", "{}% used", 91);
//! ```

/// Log a message at a given level.
///
/// The arguments are formatted while the target logger's lock is held; they
/// must not log through that logger again.
///
/// # Examples
///
/// ```
/// use ultralog::{log, LogLevel};
/// log!(LogLevel::Info, "app", "Simple message");
/// log!(LogLevel::Error, "app", "Error code: {}", 500);
/// ```
///
/// Wrapping macros can forward their own arguments:
///
/// ```
/// macro_rules! db_log {
///     ($level:expr, $($arg:tt)+) => {
///         ultralog::log!($level, "db", $($arg)+)
///     };
/// }
/// db_log!(ultralog::LogLevel::Warning, "slow query: {} ms", 1200);
/// ```
#[macro_export]
macro_rules! log {
    (target: $logger:expr, $level:expr, $module:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::LogLevel = $level;
        if logger.enabled(level) {
            logger.log(level, $module, ::std::format_args!($($arg)+));
        }
    }};
    ($level:expr, $module:expr, $($arg:tt)+) => {
        $crate::log!(target: $crate::logger(), $level, $module, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// use ultralog::fatal;
/// fatal!("storage", "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    (target: $logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::log!(target: $logger, $crate::LogLevel::Fatal, $module, $($arg)+)
    };
    ($module:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Fatal, $module, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// use ultralog::error;
/// error!("net", "failed: {}", 7);
/// ```
#[macro_export]
macro_rules! error {
    (target: $logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::log!(target: $logger, $crate::LogLevel::Error, $module, $($arg)+)
    };
    ($module:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $module, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    (target: $logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::log!(target: $logger, $crate::LogLevel::Warning, $module, $($arg)+)
    };
    ($module:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warning, $module, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    (target: $logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::log!(target: $logger, $crate::LogLevel::Info, $module, $($arg)+)
    };
    ($module:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $module, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    (target: $logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::log!(target: $logger, $crate::LogLevel::Debug, $module, $($arg)+)
    };
    ($module:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $module, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    (target: $logger:expr, $module:expr, $($arg:tt)+) => {
        $crate::log!(target: $logger, $crate::LogLevel::Trace, $module, $($arg)+)
    };
    ($module:expr, $($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Trace, $module, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use parking_lot::Mutex;
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn capturing_logger(level: LogLevel) -> (Logger, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let store = Arc::clone(&lines);
        let logger = Logger::builder()
            .level(level)
            .boxed_sink(crate::sink_fn(move |level, _ts, module, message| {
                store.lock().push(format!("{} {}: {}", level.code(), module, message));
            }))
            .build();
        (logger, lines)
    }

    /// Counts how often it gets formatted.
    struct Counted<'a>(&'a AtomicUsize);

    impl fmt::Display for Counted<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            f.write_str("counted")
        }
    }

    #[test]
    fn test_level_macros() {
        let (logger, lines) = capturing_logger(LogLevel::Trace);
        fatal!(target: logger, "m", "Fatal {}", 1);
        error!(target: logger, "m", "Error {}", 2);
        warning!(target: logger, "m", "Warning {}", 3);
        info!(target: logger, "m", "Info {}", 4);
        debug!(target: logger, "m", "Debug {}", 5);
        trace!(target: logger, "m", "Trace {}", 6);

        assert_eq!(
            *lines.lock(),
            vec![
                "F m: Fatal 1",
                "E m: Error 2",
                "W m: Warning 3",
                "I m: Info 4",
                "D m: Debug 5",
                "T m: Trace 6",
            ]
        );
    }

    #[test]
    fn test_log_macro_rejects_silent() {
        let (logger, lines) = capturing_logger(LogLevel::Trace);
        log!(target: logger, LogLevel::Silent, "m", "never");
        log!(target: &logger, LogLevel::Info, "m", "Formatted: {}", 42);
        assert_eq!(*lines.lock(), vec!["I m: Formatted: 42"]);
    }

    #[test]
    fn test_suppressed_arguments_not_formatted() {
        let (logger, lines) = capturing_logger(LogLevel::Error);
        let count = AtomicUsize::new(0);

        debug!(target: logger, "m", "{}", Counted(&count));
        assert_eq!(count.load(Ordering::SeqCst), 0);

        error!(target: logger, "m", "{}", Counted(&count));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(*lines.lock(), vec!["E m: counted"]);
    }
}
