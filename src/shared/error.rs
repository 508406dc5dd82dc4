use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI runners only distinguish zero from non-zero, but argument errors keep
/// clap's conventional code so wrapper scripts can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Scan (and submission, if any) finished
    Success = 0,
    /// The job step failed; the reason was reported through the platform logger
    Failure = 1,
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
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for component detection and submission.
///
/// Only file-level and process-level failures are represented here.
/// Per-record problems in the scan result are downgraded to log diagnostics
/// and never surface as an error.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("Scan result file not found: {path}\n\n💡 Hint: {suggestion}")]
    ResultFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse scan result file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that component-detection completed and wrote a valid manifest file")]
    ResultFileParseError { path: PathBuf, details: String },

    #[error("Failed to parse environment file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid conda environment YAML document")]
    EnvironmentFileParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("{name} input is required. {hint}")]
    MissingInput { name: String, hint: String },

    #[error("Invalid value for input '{name}': {reason}")]
    InvalidInput { name: String, reason: String },

    #[error("Package already present in cache: {purl}")]
    DuplicatePackage { purl: String },

    #[error("Failed to download component-detection: {details}")]
    ScannerDownloadFailed { details: String },

    #[error("component-detection run failed: {details}")]
    ScannerFailed { details: String },

    #[error("Failed to submit snapshot to GitHub (HTTP {status})\nResponse: {body}")]
    SubmissionFailed { status: u16, body: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
