//! Commit ordering.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// Serializes "mutate then push" sections across all use cases.
///
/// Holding the guard while committing a change and queuing its event means
/// every connection receives events in commit order, and a catch-up snapshot
/// is never interleaved with a concurrent change.
#[derive(Debug, Clone, Default)]
pub struct CommitSequencer {
    lock: Arc<Mutex<()>>,
}

impl CommitSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn enter(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }
}
