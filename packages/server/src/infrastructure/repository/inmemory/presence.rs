//! In-memory `PresenceRepository` implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, Presence, PresenceRepository, RepositoryError, Worker};

pub struct InMemoryPresenceRepository {
    presence: Arc<Mutex<Presence>>,
}

impl InMemoryPresenceRepository {
    pub fn new(presence: Arc<Mutex<Presence>>) -> Self {
        Self { presence }
    }
}

impl Default for InMemoryPresenceRepository {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(Presence::new())))
    }
}

#[async_trait]
impl PresenceRepository for InMemoryPresenceRepository {
    async fn register_worker(&self, worker: Worker) -> Result<(), RepositoryError> {
        self.presence.lock().await.register(worker);
        Ok(())
    }

    async fn unregister_worker(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<Worker>, RepositoryError> {
        Ok(self.presence.lock().await.unregister(connection_id))
    }

    async fn list_workers(&self) -> Vec<Worker> {
        self.presence.lock().await.workers().to_vec()
    }

    async fn count_workers(&self) -> usize {
        self.presence.lock().await.len()
    }
}
