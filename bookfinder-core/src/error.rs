//! Error types for Book Finder Core

use thiserror::Error;

/// Result type alias using SearchError
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised by the search pipeline
///
/// `EmptyQuery` is the only user-input error and is surfaced as an inline
/// warning before any request is made. The remaining variants all collapse
/// into one generic "failed to fetch" message at the presentation layer.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Please enter a book title to search")]
    EmptyQuery,

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
