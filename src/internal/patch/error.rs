//! Error types for loading, rewriting and saving a patch target.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while patching a source file.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The target file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Read or write failure other than a missing file.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A rule pattern failed to compile.
    #[error("invalid pattern in rule '{name}': {source}")]
    InvalidRule {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// A rule file could not be read or parsed.
    #[error("bad rule file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A rule did not match the expected number of times.
    #[error("rule '{rule}' matched {matches} time(s), expected exactly one")]
    AnchorNotFound { rule: String, matches: usize },

    /// A rule found nothing to replace.
    #[error("rule '{rule}' found no anchor")]
    AnchorMissing { rule: String },

    /// Command line could not be parsed.
    #[error("{0}")]
    InvalidArgument(String),
}

impl PatchError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        PatchError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for patch operations.
pub type PatchResult<T> = Result<T, PatchError>;
