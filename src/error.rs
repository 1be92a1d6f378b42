//! Error types for content loading.

use thiserror::Error;

/// Why a home content document could not be obtained.
#[derive(Error, Debug)]
pub enum ContentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Reading the document from disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON of the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The page carries no embedded content element.
    #[error("Embedded content element #{0} not found")]
    EmbeddedMissing(&'static str),
}

/// Result type alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;
