//! Error types for modify-patchlist.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the patch list pipeline.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum PatchlistError {
    /// The manifest or the markdown document does not exist.
    #[error("{kind} not found: '{}'", .path.display())]
    ConfigNotFound { kind: &'static str, path: PathBuf },

    /// The manifest exists but is not valid YAML for the expected shape.
    #[error("failed to parse manifest '{}': {message}", .path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// An input exists but could not be read (permissions, invalid UTF-8).
    #[error("failed to read {kind} '{}': {source}", .path.display())]
    ReadError {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the patched document failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid arguments or an unusable environment.
    #[error("{0}")]
    UserError(String),
}

impl PatchlistError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PatchlistError::ConfigNotFound { .. } => exit_codes::USER_ERROR,
            PatchlistError::ConfigParseError { .. } => exit_codes::USER_ERROR,
            PatchlistError::ReadError { .. } => exit_codes::USER_ERROR,
            PatchlistError::UserError(_) => exit_codes::USER_ERROR,
            PatchlistError::Io { .. } => exit_codes::IO_FAILURE,
        }
    }

    /// Wrap an I/O error with a description of what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        PatchlistError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for patch list operations.
pub type Result<T> = std::result::Result<T, PatchlistError>;
