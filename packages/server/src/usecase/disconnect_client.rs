//! UseCase: クライアント切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute() メソッド
//! - 送信チャンネルの登録解除と、ワーカーであればプレゼンスからの削除
//!
//! ### なぜこのテストが必要か
//! - ワーカーの切断が残りの全接続に worker_update として伝わることを保証
//! - ワーカー登録をしていない接続（ダッシュボード）の切断で余計な通知が出ないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：ワーカー接続の切断
//! - エッジケース：未登録の接続の切断（ブロードキャストなし）

use std::sync::Arc;

use crate::domain::{
    ConnectionId, DashboardEvent, MessagePusher, PresenceRepository, RepositoryError, Worker,
};

use super::sequencer::CommitSequencer;

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    presence: Arc<dyn PresenceRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    sequencer: CommitSequencer,
}

impl DisconnectClientUseCase {
    pub fn new(
        presence: Arc<dyn PresenceRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        sequencer: CommitSequencer,
    ) -> Self {
        Self {
            presence,
            message_pusher,
            sequencer,
        }
    }

    /// クライアント切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Worker))` - ワーカーが削除され、worker_update を送信済み
    /// * `Ok(None)` - ワーカーではない接続（何もブロードキャストしない）
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<Worker>, RepositoryError> {
        let _commit = self.sequencer.enter().await;

        self.message_pusher.unregister_client(connection_id).await;

        let Some(worker) = self.presence.unregister_worker(connection_id).await? else {
            return Ok(None);
        };
        tracing::info!("Worker '{}' offline ('{}')", worker.name, connection_id);

        let workers = self.presence.list_workers().await;
        if let Err(e) = self
            .message_pusher
            .broadcast(&DashboardEvent::WorkerUpdate(workers))
            .await
        {
            tracing::warn!("Failed to broadcast worker_update: {}", e);
        }

        Ok(Some(worker))
    }
}
