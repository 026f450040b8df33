//! Error types for the chathub client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server URL cannot be turned into an HTTP/WebSocket endpoint
    #[error("Invalid server URL '{0}': expected http:// or https://")]
    InvalidServerUrl(String),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Every reconnection attempt failed
    #[error("Gave up after {0} connection attempts")]
    ReconnectExhausted(u32),

    /// The request never got a response
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl ClientError {
    /// Errors that a reconnection cannot fix.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidServerUrl(_))
    }
}
