//! Error types for mmds-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for mmds-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mmds-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from mmds-core
    #[error(transparent)]
    Core(#[from] mmds_core::Error),

    /// Configuration could not be resolved, read or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error on an output or config file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether the failure is drift between the token source and the model.
    pub fn is_drift(&self) -> bool {
        matches!(self, Error::Core(e) if e.is_drift())
    }
}
