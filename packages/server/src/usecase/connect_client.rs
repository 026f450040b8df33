//! UseCase: クライアント接続処理（キャッチアップ）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectClientUseCase::execute() メソッド
//! - 新規接続にだけ現在のワーカー一覧と全ジョブ一覧が送られること
//!
//! ### なぜこのテストが必要か
//! - 後から接続したダッシュボードがサーバと同じ状態を持てることを保証
//! - キャッチアップが既存の接続に再送されないことを確認
//! - キャッチアップがその後の差分イベントより必ず先に届くことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：ワーカーとジョブが存在する状態での接続
//! - エッジケース：空の状態での接続、接続直後のイベント

use std::sync::Arc;

use crate::domain::{
    ConnectionId, DashboardEvent, MessagePusher, PresenceRepository, PusherChannel,
    StoreRepository,
};

use super::{error::ConnectError, sequencer::CommitSequencer};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    store: Arc<dyn StoreRepository>,
    presence: Arc<dyn PresenceRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    sequencer: CommitSequencer,
}

impl ConnectClientUseCase {
    pub fn new(
        store: Arc<dyn StoreRepository>,
        presence: Arc<dyn PresenceRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        sequencer: CommitSequencer,
    ) -> Self {
        Self {
            store,
            presence,
            message_pusher,
            sequencer,
        }
    }

    /// 接続を登録し、キャッチアップを送信
    ///
    /// 登録とスナップショット送信は一つのコミット内で行うため、以降の
    /// ブロードキャストより必ず先に `sender` へ積まれる。この時点では
    /// ワーカーとしては登録されない（`register_worker` 受信後に登録）。
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 登録成功（worker_update, initial_jobs の順で送信済み）
    /// * `Err(ConnectError)` - スナップショットを送れなかった（登録は取り消される）
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        sender: PusherChannel,
    ) -> Result<(), ConnectError> {
        let _commit = self.sequencer.enter().await;

        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;

        let workers = self.presence.list_workers().await;
        let jobs = self.store.list_jobs().await;
        let (worker_count, job_count) = (workers.len(), jobs.len());

        let snapshot = [
            DashboardEvent::WorkerUpdate(workers),
            DashboardEvent::InitialJobs(jobs),
        ];
        for event in &snapshot {
            if let Err(e) = self.message_pusher.push_to(&connection_id, event).await {
                self.message_pusher.unregister_client(&connection_id).await;
                return Err(e.into());
            }
        }

        tracing::info!(
            "Sent catch-up to '{}' ({} worker(s), {} job(s))",
            connection_id,
            worker_count,
            job_count
        );
        Ok(())
    }
}
