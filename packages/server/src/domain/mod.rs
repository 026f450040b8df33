//! Domain layer: entities, value objects, events and the traits the
//! outer layers implement.

pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use entity::{Comment, Job, JobStatus, Presence, Store, Worker, WorkerStatus};
pub use error::{MessagePushError, RepositoryError, ValueObjectError};
pub use event::DashboardEvent;
pub use factory::IdFactory;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::{PresenceRepository, StoreRepository};
pub use value_object::{
    CommentId, CommentText, ConnectionId, JobId, JobUrl, Timestamp, UserName, WorkerName,
    WorkerRef,
};
