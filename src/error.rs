//! Error taxonomy for the find/match engine

use std::io;
use thiserror::Error;

/// Errors raised by walking, rooting and matching
#[derive(Debug, Error)]
pub enum FindError {
    /// A path visited during a walk or stat does not exist
    #[error("No such file or directory: {path}")]
    NotFound { path: String },

    /// A symbolic link whose target does not exist
    #[error("Broken symbolic link: {path}")]
    BrokenSymlink { path: String },

    /// Pattern rejected before any filesystem access
    #[error("Invalid pattern: '{pattern}'")]
    InvalidPattern { pattern: String },

    /// A required argument was empty or inconsistent
    #[error("{0}")]
    InvalidArgument(String),

    /// Any other OS-level failure
    #[error("Failed {operation} for '{path}': {source}")]
    Io {
        operation: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// Glob compilation failure
    #[error("Invalid glob '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

impl FindError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(operation: &'static str, path: impl Into<String>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { operation, path, source: err },
        }
    }

    /// True for ENOENT-class failures (missing entries and dangling links)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::BrokenSymlink { .. })
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, FindError>;
