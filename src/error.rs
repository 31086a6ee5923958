//! Error types for scanning and report writing

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a scan.
///
/// Access denial on a single directory is not one of these: the walker
/// records it on the affected node and keeps going.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Path '{}' does not exist.", .0.display())]
    PathNotFound(PathBuf),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
