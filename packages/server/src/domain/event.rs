//! Events pushed from the server to connected clients.

use super::entity::{Comment, Job, Worker};

/// A state change (or snapshot) delivered over the push channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// A comment was appended to the store
    NewComment(Comment),
    /// A job was appended to the store
    NewJob(Job),
    /// Every comment was discarded
    ClearComments,
    /// Full current worker list (never a delta)
    WorkerUpdate(Vec<Worker>),
    /// Full job list, sent only as part of the catch-up snapshot
    InitialJobs(Vec<Job>),
}

impl DashboardEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewComment(_) => "new_comment",
            Self::NewJob(_) => "new_job",
            Self::ClearComments => "clear_comments",
            Self::WorkerUpdate(_) => "worker_update",
            Self::InitialJobs(_) => "initial_jobs",
        }
    }
}
