//! UseCase error types.

use thiserror::Error;

use crate::domain::{MessagePushError, RepositoryError, ValueObjectError};

/// Failure of a comment or job submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A required field was missing or empty; nothing was stored
    #[error("Data missing: {0}")]
    Validation(#[from] ValueObjectError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Failure while attaching a new connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// The catch-up snapshot could not be queued for the connection
    #[error("Failed to deliver catch-up snapshot: {0}")]
    CatchUp(#[from] MessagePushError),
}
