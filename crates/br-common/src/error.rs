//! Error types for Bayes Reasoning.

use thiserror::Error;

/// Result type alias for Bayes Reasoning operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type surfaced at the CLI boundary.
///
/// Library crates keep their own precise error enums; this type groups them
/// by the phase they belong to so callers can tell session-ending failures
/// (configuration) from retryable ones (queries).
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("no configuration files found in {dir}")]
    NoConfigFound { dir: String },

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    // Selection errors (20-29)
    #[error("invalid fact selection: {0}")]
    Selection(String),

    // Inference errors (30-39)
    #[error("inference failed: {0}")]
    Inference(String),

    #[error("{kind} index {index} out of range (0..{len})")]
    IndexOutOfRange {
        kind: String,
        index: usize,
        len: usize,
    },

    #[error("division by zero: {0}")]
    DivisionByZero(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::NoConfigFound { .. } => 11,
            Error::UnsupportedFormat(_) => 12,
            Error::Selection(_) => 20,
            Error::Inference(_) => 30,
            Error::IndexOutOfRange { .. } => 31,
            Error::DivisionByZero(_) => 32,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Configuration failures end the session; everything else can be
    /// retried with different input.
    pub fn is_session_fatal(&self) -> bool {
        self.code() < 20 || self.code() >= 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_grouped_by_phase() {
        assert_eq!(Error::Config("x".into()).code(), 10);
        assert_eq!(Error::Selection("x".into()).code(), 20);
        assert_eq!(Error::DivisionByZero("x".into()).code(), 32);
        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.code(), 60);
    }

    #[test]
    fn config_errors_are_session_fatal() {
        assert!(Error::Config("empty".into()).is_session_fatal());
        assert!(Error::NoConfigFound { dir: ".".into() }.is_session_fatal());
    }

    #[test]
    fn query_errors_are_retryable() {
        let err = Error::IndexOutOfRange {
            kind: "fact".into(),
            index: 7,
            len: 3,
        };
        assert!(!err.is_session_fatal());
        assert_eq!(err.to_string(), "fact index 7 out of range (0..3)");
        assert!(!Error::Selection("abc".into()).is_session_fatal());
    }
}
