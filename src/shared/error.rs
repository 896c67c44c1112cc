use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A run either emits one snapshot document and exits with `Success`,
/// or emits nothing on stdout and exits non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Snapshot written
    Success = 0,
    /// Input, configuration or output failure
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency snapshot generation.
///
/// Every variant is fatal for the run. The CLI prints the message and
/// exits with [`ExitCode::ApplicationError`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Invalid source location: {location}\nDetails: {details}\n\n💡 Hint: Every package must have a URL with a scheme, e.g. https://github.com/org/repo.git")]
    InvalidSourceLocation { location: String, details: String },

    #[error("Malformed package URL: {value}\n\n💡 Hint: Expected the form pkg:swift/<source>/<name>@<version>")]
    MalformedCanonicalId { value: String },

    #[error("Failed to decode dependency tree from {source_name}\nDetails: {details}\n\n💡 Hint: Pipe the output of `swift package show-dependencies --format json`")]
    InputDecodeFailure { source_name: String, details: String },

    #[error("Incomplete environment: {name}\n\n💡 Hint: Set the {name} environment variable or provide it in the config file")]
    IncompleteEnvironment { name: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
