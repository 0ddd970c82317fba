//! Error types for the API client.

/// Errors that can occur when talking to the Upbit REST API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body could not be deserialized.
    #[error("failed to parse response: {0}")]
    Parse(String),
}
