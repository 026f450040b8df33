//! UseCase: ワーカー登録処理
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録後、全接続にワーカー全件の worker_update が届く
//! - エッジケース：同じ接続での再登録（重複せず上書き）、名前の省略

use std::sync::Arc;

use chathub_shared::time::Clock;

use crate::domain::{
    ConnectionId, DashboardEvent, MessagePusher, PresenceRepository, RepositoryError, Timestamp,
    Worker, WorkerName,
};

use super::sequencer::CommitSequencer;

/// ワーカー登録のユースケース
pub struct RegisterWorkerUseCase {
    presence: Arc<dyn PresenceRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
    sequencer: CommitSequencer,
}

impl RegisterWorkerUseCase {
    pub fn new(
        presence: Arc<dyn PresenceRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
        sequencer: CommitSequencer,
    ) -> Self {
        Self {
            presence,
            message_pusher,
            clock,
            sequencer,
        }
    }

    /// ワーカー登録を実行
    ///
    /// `connection_id` をキーにレコードを作成または上書きし、
    /// ワーカー全件を全接続へブロードキャストする。
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        name: Option<String>,
    ) -> Result<Worker, RepositoryError> {
        let _commit = self.sequencer.enter().await;

        let worker = Worker::new(
            connection_id,
            WorkerName::or_anonymous(name),
            Timestamp::new(self.clock.now_millis()),
        );
        self.presence.register_worker(worker.clone()).await?;
        tracing::info!("Worker '{}' registered on '{}'", worker.name, worker.id);

        let workers = self.presence.list_workers().await;
        if let Err(e) = self
            .message_pusher
            .broadcast(&DashboardEvent::WorkerUpdate(workers))
            .await
        {
            tracing::warn!("Failed to broadcast worker_update: {}", e);
        }

        Ok(worker)
    }
}
