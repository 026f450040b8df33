//! Entities and the two in-memory aggregates.
//!
//! `Store` holds comments and jobs. `Presence` holds the worker records of
//! live connections. Neither persists anything; both live as long as the
//! process.

use super::value_object::{
    CommentId, CommentText, ConnectionId, JobId, JobUrl, Timestamp, UserName, WorkerName,
    WorkerRef,
};

/// A scraped live-chat comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub user_name: UserName,
    pub text: CommentText,
    pub worker_id: WorkerRef,
    pub timestamp: Timestamp,
}

impl Comment {
    pub fn new(
        id: CommentId,
        user_name: UserName,
        text: CommentText,
        worker_id: WorkerRef,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            user_name,
            text,
            worker_id,
            timestamp,
        }
    }
}

/// Job lifecycle state.
///
/// Only `Pending` is ever assigned; nothing transitions a job today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    InProgress,
    Done,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

/// A request to scrape one live stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub url: JobUrl,
    pub status: JobStatus,
}

impl Job {
    /// New jobs always start out pending.
    pub fn new(id: JobId, url: JobUrl) -> Self {
        Self {
            id,
            url,
            status: JobStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == JobStatus::Pending
    }
}

/// Presence state of a worker. Absence from [`Presence`] means offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStatus {
    Online,
}

/// Presence record of a registered worker connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    pub id: ConnectionId,
    pub name: WorkerName,
    pub status: WorkerStatus,
    pub connected_at: Timestamp,
}

impl Worker {
    pub fn new(id: ConnectionId, name: WorkerName, connected_at: Timestamp) -> Self {
        Self {
            id,
            name,
            status: WorkerStatus::Online,
            connected_at,
        }
    }
}

/// Authoritative comment and job collections
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Comments in insertion (chronological) order
    pub comments: Vec<Comment>,
    /// Jobs in insertion order
    pub jobs: Vec<Job>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Drop every comment and return how many were removed.
    /// Jobs are untouched.
    pub fn clear_comments(&mut self) -> usize {
        let removed = self.comments.len();
        self.comments.clear();
        removed
    }

    pub fn add_job(&mut self, job: Job) {
        self.jobs.push(job);
    }

    /// Pending jobs in insertion order.
    pub fn pending_jobs(&self) -> Vec<Job> {
        self.jobs.iter().filter(|j| j.is_pending()).cloned().collect()
    }
}

/// Worker records keyed by connection identity, in registration order
#[derive(Debug, Clone, Default)]
pub struct Presence {
    workers: Vec<Worker>,
}

impl Presence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record of `worker.id`.
    ///
    /// Re-registration on the same connection replaces name and timestamp in
    /// place and keeps the original position.
    pub fn register(&mut self, worker: Worker) {
        match self.workers.iter_mut().find(|w| w.id == worker.id) {
            Some(existing) => *existing = worker,
            None => self.workers.push(worker),
        }
    }

    /// Remove the record of `connection_id`, returning it if there was one.
    pub fn unregister(&mut self, connection_id: &ConnectionId) -> Option<Worker> {
        let index = self.workers.iter().position(|w| &w.id == connection_id)?;
        Some(self.workers.remove(index))
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}
