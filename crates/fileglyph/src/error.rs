//! Error types for the icon theme runtime.

use std::io;
use std::path::PathBuf;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by theme sources and settings storage.
///
/// None of these reach callers of `set_active` or `load`; those log and
/// degrade to an undecorated file tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Engine error (rule rejected, theme failed to decode).
    #[error(transparent)]
    Style(#[from] fileglyph_style::Error),

    /// Filesystem error on a theme or settings file.
    #[error("I/O error on '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// A theme or settings file is not valid JSON.
    #[error("Invalid JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error for `path`.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Check whether this is a "file not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
