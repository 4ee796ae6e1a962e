//! Error types for index builds.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for Folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    /// An input file could not be opened or read.
    #[error("Input unavailable: {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The build was invoked with an incomplete or inconsistent configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The report file could not be created or written.
    #[error("Output error: {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    pub fn input_unavailable(path: impl AsRef<Path>, source: io::Error) -> Self {
        FolioError::InputUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        FolioError::InvalidConfig(msg.into())
    }

    pub fn output(path: impl AsRef<Path>, source: io::Error) -> Self {
        FolioError::Output {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Check if this error was caused by an unreadable input file.
    pub fn is_input_unavailable(&self) -> bool {
        matches!(self, FolioError::InputUnavailable { .. })
    }

    /// Check if this error was raised before any I/O because of caller misuse.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, FolioError::InvalidConfig(_))
    }
}
