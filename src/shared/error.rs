use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the enriched SBOM was produced
    Success = 0,
    /// The target/incoming schema pair has no merge policy yet
    UnsupportedSchemaPair = 1,
    /// Invalid command-line arguments (clap parsing errors, missing paths)
    InvalidArguments = 2,
    /// Application error (file I/O error, malformed mapping table, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an error returned by the enrichment run
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<EnrichError>() {
            Some(EnrichError::NotImplemented { .. }) => ExitCode::UnsupportedSchemaPair,
            Some(EnrichError::InvalidArguments { .. }) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnsupportedSchemaPair => write!(f, "Unsupported Schema Pair (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM enrichment.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("Invalid arguments: {reason}\n\n💡 Hint: Provide both a target SBOM path and an incoming SBOM path")]
    InvalidArguments { reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse SBOM document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON")]
    SbomParseError { path: PathBuf, details: String },

    #[error("Failed to load field mapping table: {path}\nDetails: {details}\n\n💡 Hint: Mapping tables must be JSON objects of the form {{\"field\": {{\"SPDX_Equivalent\": \"name\" | null}}}}")]
    MappingTableError { path: PathBuf, details: String },

    #[error("Unsupported target SBOM: {reason}\n\n💡 Hint: The target document must be a CycloneDX or SPDX JSON SBOM")]
    UnsupportedTarget { reason: String },

    #[error("Enriching a {target} SBOM from a {incoming} document is not implemented yet")]
    NotImplemented { target: String, incoming: String },

    #[error("Malformed target SBOM: {reason}")]
    MalformedDocument { reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
