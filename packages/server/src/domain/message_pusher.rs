//! Outbound push abstraction.
//!
//! Use cases decide *what* to push and *to whom*; implementations own the
//! per-connection channels and the wire encoding.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, DashboardEvent, MessagePushError};

/// Channel feeding one connection's outbound frames
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Start delivering events to `connection_id` through `sender`
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// Stop delivering events to `connection_id`; no-op if unknown
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// Deliver `event` to a single connection
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &DashboardEvent,
    ) -> Result<(), MessagePushError>;

    /// Deliver `event` to every registered connection.
    ///
    /// A failing connection does not abort delivery to the others.
    async fn broadcast(&self, event: &DashboardEvent) -> Result<(), MessagePushError>;

    /// Number of registered connections
    async fn connected_count(&self) -> usize;
}
