use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets CI pipelines tell argument mistakes apart from runtime failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Reports were generated (possibly with non-fatal warnings)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (service error, unreadable state file, write failure, etc.)
    ApplicationError = 3,
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for report generation.
///
/// Only fatal conditions live here. Decode problems, missing attributes and
/// unusable artifacts degrade to warnings instead.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Terraform state file not found: {path}\n\n💡 Hint: {suggestion}")]
    StateFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read Terraform state file: {path}\nDetails: {details}\n\n💡 Hint: The state file must be a base64-encoded text file")]
    StateFileReadError { path: PathBuf, details: String },

    #[error("{variable} environment variable not set\n\n💡 Hint: export {variable}='your-api-key-here'")]
    MissingApiKey { variable: String },

    #[error("API Error ({status}): {body}\n\n💡 Hint: Verify the API key and that the assessment service is reachable")]
    ServiceError { status: u16, body: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid output directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify a writable directory with --output-dir")]
    InvalidOutputDirectory { path: PathBuf, reason: String },

    /// Rejected configuration value
    #[error("Invalid config: {message}\n\n💡 Hint: {hint}")]
    Validation { message: String, hint: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
