//! Errors raised while touching target files

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while collecting, scanning or fixing files
#[derive(Debug, Error)]
pub enum ScanError {
    /// Target path does not exist
    #[error("no such file or directory: {0}")]
    NotFound(PathBuf),

    /// File could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// The offending path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File could not be read after opening
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// The offending path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Fixed content could not be written back
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// The offending path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error walking a directory tree
    #[error("walkdir error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ScanError {
    /// The path this error is about, when there is one
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotFound(path)
            | Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. } => Some(path.as_path()),
            Self::Walk(err) => err.path(),
        }
    }
}
