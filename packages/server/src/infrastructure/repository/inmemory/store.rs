//! In-memory `StoreRepository` implementation.
//!
//! The `Store` aggregate itself is the storage; every call takes the mutex
//! for the duration of one aggregate operation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Comment, Job, RepositoryError, Store, StoreRepository};

pub struct InMemoryStoreRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryStoreRepository {
    pub fn new(store: Arc<Mutex<Store>>) -> Self {
        Self { store }
    }
}

impl Default for InMemoryStoreRepository {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(Store::new())))
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn add_comment(&self, comment: Comment) -> Result<(), RepositoryError> {
        self.store.lock().await.add_comment(comment);
        Ok(())
    }

    async fn list_comments(&self) -> Vec<Comment> {
        self.store.lock().await.comments.clone()
    }

    async fn clear_comments(&self) -> Result<usize, RepositoryError> {
        Ok(self.store.lock().await.clear_comments())
    }

    async fn add_job(&self, job: Job) -> Result<(), RepositoryError> {
        self.store.lock().await.add_job(job);
        Ok(())
    }

    async fn list_jobs(&self) -> Vec<Job> {
        self.store.lock().await.jobs.clone()
    }

    async fn list_pending_jobs(&self) -> Vec<Job> {
        self.store.lock().await.pending_jobs()
    }
}
