//! Document loading and output.
//!
//! Handles loading generated documents from files, strings, and HTTP URLs.

use std::path::Path;

use serde_json::Value;

use crate::error::DocumentError;

#[cfg(feature = "remote")]
use std::time::Duration;

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Load a document from a file path.
///
/// # Errors
///
/// Returns `DocumentError::FileNotFound` if the file doesn't exist,
/// or `DocumentError::InvalidJson` if the file isn't valid JSON.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_document_str(&content)
}

/// Load a document from a JSON string.
///
/// # Errors
///
/// Returns `DocumentError::InvalidJson` if the string isn't valid JSON.
pub fn load_document_str(content: &str) -> Result<Value, DocumentError> {
    serde_json::from_str(content).map_err(|source| DocumentError::InvalidJson { source })
}

/// Load a document from an HTTP/HTTPS URL.
///
/// Points at a running service's document endpoint (e.g.
/// `https://api.example.com/openapi.json`). Requires the `remote` feature
/// (enabled by default).
///
/// # Errors
///
/// Returns `DocumentError::NetworkError` if the request fails,
/// or `DocumentError::InvalidJson` if the response isn't valid JSON.
#[cfg(feature = "remote")]
pub fn load_document_url(url: &str) -> Result<Value, DocumentError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|source| DocumentError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|source| DocumentError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    response
        .json()
        .map_err(|source| DocumentError::NetworkError {
            url: url.to_string(),
            source,
        })
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load a document from a file path or URL, dispatching on shape.
pub fn load_document_auto(source: &str) -> Result<Value, DocumentError> {
    if is_url(source) {
        #[cfg(feature = "remote")]
        {
            load_document_url(source)
        }
        #[cfg(not(feature = "remote"))]
        {
            Err(DocumentError::FileNotFound {
                path: std::path::PathBuf::from(source),
            })
        }
    } else {
        load_document(Path::new(source))
    }
}

/// Serialize a document, compact or pretty-printed.
pub fn render_document(document: &Value, pretty: bool) -> String {
    if pretty {
        // Value serialization does not fail
        serde_json::to_string_pretty(document).unwrap_or_default()
    } else {
        serde_json::to_string(document).unwrap_or_default()
    }
}

/// Write a document to a file.
///
/// # Errors
///
/// Returns `DocumentError::WriteError` on I/O failure.
pub fn write_document(path: &Path, document: &Value, pretty: bool) -> Result<(), DocumentError> {
    std::fs::write(path, render_document(document, pretty)).map_err(|source| {
        DocumentError::WriteError {
            path: path.to_path_buf(),
            source,
        }
    })
}
