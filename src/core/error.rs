//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors surfaced by configuration and by sinks.
///
/// The logging calls themselves never return these: sink errors are caught
/// by the dispatch core and reported on stderr.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// The process-wide logger already exists
    #[error("Global logger already initialized")]
    AlreadyInitialized,

    /// A sink rejected a record
    #[error("Sink '{sink}' failed: {message}")]
    SinkError { sink: String, message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("ULOG_LEVEL", "unknown level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::sink("network", "connection reset");
        assert!(matches!(err, LoggerError::SinkError { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("ULOG_MAX_MESSAGE_LENGTH", "not a number");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for ULOG_MAX_MESSAGE_LENGTH: not a number"
        );

        let err = LoggerError::sink("console", "stdout closed");
        assert_eq!(err.to_string(), "Sink 'console' failed: stdout closed");

        assert_eq!(
            LoggerError::AlreadyInitialized.to_string(),
            "Global logger already initialized"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing console line", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing console line"));
        assert!(err.to_string().contains("pipe closed"));
    }
}
