//! Domain-level error types.

use thiserror::Error;

/// Errors raised while constructing value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// A required text field was missing or empty
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Errors raised by repository implementations.
///
/// The in-memory repositories never fail; the variant exists for backends
/// that can, and is what the HTTP layer maps to `500`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while pushing events to connections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// No channel is registered for the connection
    #[error("Connection '{0}' not found")]
    ClientNotFound(String),

    /// The connection's channel is closed
    #[error("Push failed: {0}")]
    PushFailed(String),

    /// The event could not be encoded for the wire
    #[error("Failed to encode event: {0}")]
    Encode(String),
}
