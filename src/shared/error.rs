use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell a rejected request apart from a broken one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the command completed (an unapplied voucher is still a success)
    Success = 0,
    /// The request conflicted with existing vouchers
    Conflict = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (validation, store I/O, output errors)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned from the application
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<VoucherError>() {
            Some(e) if e.is_conflict() => ExitCode::Conflict,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Conflict => write!(f, "Conflict (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the voucher service.
///
/// `Conflict` is the only business error; its Display output is the bare
/// message so callers can show it as-is.
#[derive(Debug, Error)]
pub enum VoucherError {
    #[error("{message}")]
    Conflict { message: String },

    /// Malformed input rejected while building value types
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to access voucher store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the store file is readable, writable and contains valid JSON")]
    Storage { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl VoucherError {
    pub fn conflict(message: impl Into<String>) -> Self {
        VoucherError::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        VoucherError::Validation {
            message: message.into(),
        }
    }

    pub fn storage(path: impl Into<PathBuf>, details: impl fmt::Display) -> Self {
        VoucherError::Storage {
            path: path.into(),
            details: details.to_string(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, VoucherError::Conflict { .. })
    }
}
