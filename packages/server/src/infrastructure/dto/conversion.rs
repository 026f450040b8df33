//! Conversion logic from domain entities and events to DTOs.

use chathub_shared::time::timestamp_to_rfc3339;

use crate::domain::{Comment, DashboardEvent, Job, JobStatus, Worker, WorkerStatus};

use super::{
    payload::{CommentDto, JobDto, JobStatusDto, WorkerDto, WorkerStatusDto},
    websocket::ServerMessage,
};

impl From<&Comment> for CommentDto {
    fn from(model: &Comment) -> Self {
        Self {
            id: model.id.as_str().to_string(),
            user_name: model.user_name.as_str().to_string(),
            text: model.text.as_str().to_string(),
            worker_id: model.worker_id.as_str().to_string(),
            timestamp: timestamp_to_rfc3339(model.timestamp.value()),
        }
    }
}

impl From<JobStatus> for JobStatusDto {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Pending => Self::Pending,
            JobStatus::InProgress => Self::InProgress,
            JobStatus::Done => Self::Done,
            JobStatus::Failed => Self::Failed,
        }
    }
}

impl From<&Job> for JobDto {
    fn from(model: &Job) -> Self {
        Self {
            id: model.id.as_str().to_string(),
            url: model.url.as_str().to_string(),
            status: model.status.into(),
        }
    }
}

impl From<WorkerStatus> for WorkerStatusDto {
    fn from(status: WorkerStatus) -> Self {
        match status {
            WorkerStatus::Online => Self::Online,
        }
    }
}

impl From<&Worker> for WorkerDto {
    fn from(model: &Worker) -> Self {
        Self {
            id: model.id.as_str().to_string(),
            name: model.name.as_str().to_string(),
            status: model.status.into(),
            connected_at: timestamp_to_rfc3339(model.connected_at.value()),
        }
    }
}

impl From<&DashboardEvent> for ServerMessage {
    fn from(event: &DashboardEvent) -> Self {
        match event {
            DashboardEvent::NewComment(comment) => Self::NewComment(comment.into()),
            DashboardEvent::NewJob(job) => Self::NewJob(job.into()),
            DashboardEvent::ClearComments => Self::ClearComments,
            DashboardEvent::WorkerUpdate(workers) => {
                Self::WorkerUpdate(workers.iter().map(WorkerDto::from).collect())
            }
            DashboardEvent::InitialJobs(jobs) => {
                Self::InitialJobs(jobs.iter().map(JobDto::from).collect())
            }
        }
    }
}
