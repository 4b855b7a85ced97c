//! Error types for the logger facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Level token not present in the level table
    #[error("Invalid log level: '{input}'")]
    InvalidLevel { input: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            input: input.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("loud");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err = LoggerError::config("LoggerConfig", "LOG_LEVEL is not valid UTF-8");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::writer("sink poisoned");
        assert!(matches!(err, LoggerError::WriterError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("loud");
        assert_eq!(err.to_string(), "Invalid log level: 'loud'");

        let err = LoggerError::config("StdPrinter", "empty timestamp layout");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for StdPrinter: empty timestamp layout"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing record", "sink rejected bytes", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing record"));
        assert!(err.to_string().contains("sink rejected bytes"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
