//! WebSocket-backed `MessagePusher`.
//!
//! The UI layer creates one `mpsc::unbounded_channel` per socket and hands the
//! sender here; a writer task drains the receiver into the socket. This type
//! only manages the senders and encodes events to JSON text frames.
//!
//! A send into an unbounded channel never awaits, so frames queued for a
//! connection keep the order in which `push_to`/`broadcast` were called.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, DashboardEvent, MessagePushError, MessagePusher, PusherChannel},
    infrastructure::dto::websocket::ServerMessage,
};

pub struct WebSocketMessagePusher {
    /// Key: connection id, Value: outbound frame channel
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self { clients }
    }

    fn encode(event: &DashboardEvent) -> Result<String, MessagePushError> {
        serde_json::to_string(&ServerMessage::from(event))
            .map_err(|e| MessagePushError::Encode(e.to_string()))
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(HashMap::new())))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
        self.clients.lock().await.insert(connection_id, sender);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        if self.clients.lock().await.remove(connection_id).is_some() {
            tracing::debug!(
                "Connection '{}' unregistered from MessagePusher",
                connection_id
            );
        }
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &DashboardEvent,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let clients = self.clients.lock().await;

        let sender = clients
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(connection_id.to_string()))?;
        sender
            .send(frame)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed '{}' to connection '{}'", event.name(), connection_id);
        Ok(())
    }

    async fn broadcast(&self, event: &DashboardEvent) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let clients = self.clients.lock().await;

        for (connection_id, sender) in clients.iter() {
            // one dead connection must not starve the rest
            if let Err(e) = sender.send(frame.clone()) {
                tracing::warn!(
                    "Failed to push '{}' to connection '{}': {}",
                    event.name(),
                    connection_id,
                    e
                );
            }
        }
        tracing::debug!(
            "Broadcasted '{}' to {} connection(s)",
            event.name(),
            clients.len()
        );

        Ok(())
    }

    async fn connected_count(&self) -> usize {
        self.clients.lock().await.len()
    }
}
