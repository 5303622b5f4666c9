//! Error types for document loading.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for fallible document operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for document loading.
///
/// Editing operations never fail; only the `try_*` constructors on
/// [`Document`](crate::Document) return this.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading a source.
    Io(io::Error),
    /// A file could not be read.
    Path { path: PathBuf, source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Path { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Path { source: e, .. } => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
