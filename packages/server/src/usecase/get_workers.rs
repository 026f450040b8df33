//! UseCase: オンラインワーカー一覧取得

use std::sync::Arc;

use crate::domain::{PresenceRepository, Worker};

/// ワーカー一覧取得のユースケース
pub struct GetWorkersUseCase {
    presence: Arc<dyn PresenceRepository>,
}

impl GetWorkersUseCase {
    pub fn new(presence: Arc<dyn PresenceRepository>) -> Self {
        Self { presence }
    }

    /// 現在のワーカー一覧を登録順に取得
    pub async fn execute(&self) -> Vec<Worker> {
        self.presence.list_workers().await
    }
}
