//! Exit codes for the br-core CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.
//! Codes of 10 and above are errors; 10 ends a session, 11–12 are query-time
//! failures that can be retried with different input.

/// Exit codes for br-core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Completed without findings
    Clean = 0,

    /// Completed; validation produced warnings
    Warnings = 1,

    /// Configuration error (missing, malformed, or structurally invalid)
    ConfigError = 10,

    /// Fact selection could not be parsed
    SelectionError = 11,

    /// Index out of range, zero evidence, or other inference failure
    InferenceError = 12,

    /// I/O error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean | ExitCode::Warnings)
    }

    /// Check if this exit code indicates an error requiring attention.
    pub fn is_error(self) -> bool {
        (self as i32) >= 10
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<&br_common::Error> for ExitCode {
    fn from(err: &br_common::Error) -> Self {
        use br_common::Error;
        match err {
            Error::Config(_) | Error::NoConfigFound { .. } | Error::UnsupportedFormat(_) => {
                ExitCode::ConfigError
            }
            Error::Selection(_) => ExitCode::SelectionError,
            Error::Inference(_) | Error::IndexOutOfRange { .. } | Error::DivisionByZero(_) => {
                ExitCode::InferenceError
            }
            Error::Io(_) => ExitCode::IoError,
            Error::Json(_) => ExitCode::InternalError,
        }
    }
}
