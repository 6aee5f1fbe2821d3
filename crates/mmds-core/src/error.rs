//! Error types for the design-token core.

use std::path::{Path, PathBuf};

/// Errors that can occur while naming, bridging or checking design tokens.
///
/// None of these conditions is recoverable at the point it is detected:
/// a missing or mistyped token must stop the build instead of resolving to
/// an empty value downstream.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A flat key (or category/sub-key pair) outside the category model.
    #[error("Unknown token key: {key}")]
    UnknownTokenKey {
        /// The offending key as it was requested
        key: String,
    },

    /// The canonical source disagrees with the category model.
    #[error(
        "Source drift: {} missing, {} undeclared{}",
        .missing.len(),
        .extra.len(),
        drift_detail(.missing, .extra)
    )]
    SourceDrift {
        /// Declared flat keys with no (or an empty) value in the source
        missing: Vec<String>,
        /// Source keys that the category model does not declare
        extra: Vec<String>,
    },

    /// The generated type contract and the category model disagree.
    #[error(
        "Type contract mismatch: {} missing, {} extra{}",
        .missing.len(),
        .extra.len(),
        drift_detail(.missing, .extra)
    )]
    TypeContractMismatch {
        /// Model keys absent from the contract tables
        missing: Vec<String>,
        /// Contract keys the model does not produce
        extra: Vec<String>,
    },

    /// The upstream transport could not be parsed.
    #[error("Parse error{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Parse {
        /// 1-based line number, when known
        line: Option<usize>,
        /// What went wrong
        message: String,
    },

    /// A token value has the wrong shape for the requested operation.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// Flat key whose value was rejected
        key: String,
        /// Why it was rejected
        message: String,
    },

    /// I/O error while reading a source file.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for token operations.
pub type Result<T> = std::result::Result<T, Error>;

fn drift_detail(missing: &[String], extra: &[String]) -> String {
    let mut detail = String::new();
    if !missing.is_empty() {
        detail.push_str(&format!(" (missing: {})", missing.join(", ")));
    }
    if !extra.is_empty() {
        detail.push_str(&format!(" (undeclared: {})", extra.join(", ")));
    }
    detail
}

impl Error {
    /// Returns whether this error is one of the contract violations that
    /// signal drift between the category model and something mirroring it.
    pub fn is_drift(&self) -> bool {
        matches!(
            self,
            Error::UnknownTokenKey { .. }
                | Error::SourceDrift { .. }
                | Error::TypeContractMismatch { .. }
        )
    }

    /// Creates an unknown-key error.
    pub fn unknown_key<S: Into<String>>(key: S) -> Self {
        Error::UnknownTokenKey { key: key.into() }
    }

    /// Creates a parse error without position information.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            line: None,
            message: message.into(),
        }
    }

    /// Creates a parse error at a 1-based line.
    pub fn parse_at<S: Into<String>>(line: usize, message: S) -> Self {
        Error::Parse {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Creates an invalid-value error.
    pub fn invalid_value<K, M>(key: K, message: M) -> Self
    where
        K: Into<String>,
        M: Into<String>,
    {
        Error::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
