//! Error types for fragment access and document processing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors when viewing a document node as a schema fragment.
#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("schema node is not an object, got {actual}")]
    NotAnObject { actual: &'static str },
}

/// Errors during document loading, transformation, and output.
#[derive(Debug, Error)]
pub enum DocumentError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Document errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("document has no schema section (components/schemas or definitions)")]
    NoSchemas,

    #[error("schema \"{name}\": {source}")]
    Fragment {
        name: String,
        #[source]
        source: FragmentError,
    },
}

impl DocumentError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } | Self::ReadError { .. } | Self::WriteError { .. } => 3,
            #[cfg(feature = "remote")]
            Self::NetworkError { .. } => 3,
            _ => 2,
        }
    }
}
