//! UseCase layer.
//!
//! One struct per operation. Each use case owns `Arc<dyn _>` handles to the
//! repositories and the pusher it needs. Every path that mutates state and
//! then pushes runs inside the shared [`CommitSequencer`].

mod clear_comments;
mod connect_client;
mod disconnect_client;
mod error;
mod get_comments;
mod get_pending_jobs;
mod get_workers;
mod register_worker;
mod sequencer;
mod submit_comment;
mod submit_job;

#[cfg(test)]
mod testing;

pub use clear_comments::ClearCommentsUseCase;
pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::{ConnectError, SubmitError};
pub use get_comments::GetCommentsUseCase;
pub use get_pending_jobs::GetPendingJobsUseCase;
pub use get_workers::GetWorkersUseCase;
pub use register_worker::RegisterWorkerUseCase;
pub use sequencer::CommitSequencer;
pub use submit_comment::SubmitCommentUseCase;
pub use submit_job::SubmitJobUseCase;
