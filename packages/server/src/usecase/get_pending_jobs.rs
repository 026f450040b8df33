//! UseCase: 未処理ジョブ一覧取得

use std::sync::Arc;

use crate::domain::{Job, StoreRepository};

/// 未処理ジョブ一覧取得のユースケース
pub struct GetPendingJobsUseCase {
    store: Arc<dyn StoreRepository>,
}

impl GetPendingJobsUseCase {
    pub fn new(store: Arc<dyn StoreRepository>) -> Self {
        Self { store }
    }

    /// pending のジョブを登録順のまま取得
    pub async fn execute(&self) -> Vec<Job> {
        self.store.list_pending_jobs().await
    }
}
