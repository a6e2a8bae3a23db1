//! Error types for the logging facade
//!
//! None of these ever reach a caller of the [`Logger`](super::Logger)
//! contract; they travel between engine internals (appenders, handlers,
//! level parsing) and are recovered locally.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Level string that no engine recognises
    #[error("Invalid log level: '{input}'")]
    InvalidLevel { input: String },

    /// Required environment variable not set
    #[error("Required environment variable not set: {key}")]
    MissingEnv { key: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            input: input.into(),
        }
    }

    /// Create a missing environment variable error
    pub fn missing_env(key: impl Into<String>) -> Self {
        LoggerError::MissingEnv { key: key.into() }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("loud");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err = LoggerError::missing_env("HOST");
        assert!(matches!(err, LoggerError::MissingEnv { .. }));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoggerError::invalid_level("loud").to_string(),
            "Invalid log level: 'loud'"
        );
        assert_eq!(
            LoggerError::missing_env("APP_VERSION").to_string(),
            "Required environment variable not set: APP_VERSION"
        );
        assert_eq!(
            LoggerError::writer("pipe closed").to_string(),
            "Writer error: pipe closed"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: LoggerError = io_err.into();
        assert!(err.to_string().contains("gone"));
    }
}
