//! Repository trait definitions.
//!
//! The domain declares the data access it needs; the infrastructure layer
//! supplies the implementations.

use async_trait::async_trait;

use super::{Comment, ConnectionId, Job, RepositoryError, Worker};

/// Access to the comment and job collections
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Append a comment at the end of the history
    async fn add_comment(&self, comment: Comment) -> Result<(), RepositoryError>;

    /// All comments in insertion order
    async fn list_comments(&self) -> Vec<Comment>;

    /// Remove every comment, returning how many were removed
    async fn clear_comments(&self) -> Result<usize, RepositoryError>;

    /// Append a job at the end of the job list
    async fn add_job(&self, job: Job) -> Result<(), RepositoryError>;

    /// All jobs in insertion order, whatever their status
    async fn list_jobs(&self) -> Vec<Job>;

    /// Pending jobs in insertion order
    async fn list_pending_jobs(&self) -> Vec<Job>;
}

/// Access to the connection → worker presence map
#[async_trait]
pub trait PresenceRepository: Send + Sync {
    /// Create or overwrite the record keyed by `worker.id`
    async fn register_worker(&self, worker: Worker) -> Result<(), RepositoryError>;

    /// Remove the record for `connection_id`; `Ok(None)` if it was never registered
    async fn unregister_worker(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<Worker>, RepositoryError>;

    /// Current records in registration order
    async fn list_workers(&self) -> Vec<Worker>;

    async fn count_workers(&self) -> usize;
}
