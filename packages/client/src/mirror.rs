//! Local copy of the server state, reconciled from pushed events.

use chathub_server::infrastructure::dto::{
    payload::{CommentDto, JobDto, WorkerDto},
    websocket::ServerMessage,
};

/// What a dashboard holds: comments and jobs in arrival order plus the
/// last worker list.
#[derive(Debug, Default, Clone)]
pub struct DashboardMirror {
    pub comments: Vec<CommentDto>,
    pub jobs: Vec<JobDto>,
    pub workers: Vec<WorkerDto>,
}

impl DashboardMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the mirror.
    pub fn apply(&mut self, message: &ServerMessage) {
        match message {
            ServerMessage::NewComment(comment) => self.comments.push(comment.clone()),
            ServerMessage::NewJob(job) => self.jobs.push(job.clone()),
            ServerMessage::ClearComments => self.comments.clear(),
            ServerMessage::WorkerUpdate(workers) => self.workers = workers.clone(),
            ServerMessage::InitialJobs(jobs) => self.jobs = jobs.clone(),
        }
    }
}
