//! Error types and exit codes for blaim operations

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for blaim operations
#[derive(Error, Debug)]
pub enum BlaimError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Malformed accept log entry: {message}")]
    AcceptLogParse { message: String },

    #[error("Failed to parse diff: {message}")]
    DiffParse { message: String },

    #[error("Failed to encode blaim records: {message}")]
    Encode { message: String },

    #[error("Failed to decode blaim records: {message}")]
    Decode { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BlaimError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Accept log parse failure
    /// - 3: Diff parse failure
    /// - 4: Blaim artifact encode/decode failure
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::AcceptLogParse { .. } => ExitCode::from(2),
            Self::DiffParse { .. } => ExitCode::from(3),
            Self::Encode { .. } => ExitCode::from(4),
            Self::Decode { .. } => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}

/// Result type alias for blaim operations
pub type Result<T> = std::result::Result<T, BlaimError>;
