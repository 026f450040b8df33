//! Push-channel message envelopes.
//!
//! Every frame is `{"event": <name>, "data": <payload>}`; events without a
//! payload omit `data`.

use serde::{Deserialize, Serialize};

use super::payload::{CommentDto, JobDto, WorkerDto};

/// Server → client frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    NewComment(CommentDto),
    NewJob(JobDto),
    ClearComments,
    WorkerUpdate(Vec<WorkerDto>),
    InitialJobs(Vec<JobDto>),
}

/// Client → server frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientMessage {
    RegisterWorker(RegisterWorkerPayload),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterWorkerPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
