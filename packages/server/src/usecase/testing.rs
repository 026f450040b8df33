//! Shared fixtures for use case tests.

use std::{collections::HashMap, sync::Arc};

use chathub_shared::time::FixedClock;
use tokio::sync::{Mutex, mpsc};

use crate::{
    domain::{ConnectionId, MessagePusher},
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryPresenceRepository, InMemoryStoreRepository},
    },
};

use super::CommitSequencer;

pub(crate) const NOW: i64 = 1_700_000_000_000;

pub(crate) struct Fixture {
    pub store: Arc<InMemoryStoreRepository>,
    pub presence: Arc<InMemoryPresenceRepository>,
    pub pusher: Arc<WebSocketMessagePusher>,
    pub clock: Arc<FixedClock>,
    pub sequencer: CommitSequencer,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryStoreRepository::default()),
            presence: Arc::new(InMemoryPresenceRepository::default()),
            pusher: Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
                HashMap::new(),
            )))),
            clock: Arc::new(FixedClock::new(NOW)),
            sequencer: CommitSequencer::new(),
        }
    }

    /// Attach a raw channel to the pusher, bypassing the catch-up snapshot.
    pub async fn listen(&self, id: &str) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.pusher.register_client(conn(id), tx).await;
        rx
    }
}

pub(crate) fn conn(id: &str) -> ConnectionId {
    ConnectionId::new(id.to_string()).unwrap()
}

/// Every frame queued so far, decoded as JSON.
pub(crate) fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<serde_json::Value> {
    let mut frames = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        frames.push(serde_json::from_str(&frame).unwrap());
    }
    frames
}
