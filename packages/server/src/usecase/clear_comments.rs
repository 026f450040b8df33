//! UseCase: コメント全削除処理
//!
//! ### どのような状況を想定しているか
//! - 正常系：コメントだけが空になり、ジョブとワーカーは残る
//! - エッジケース：空の状態で再度クリアしても同じ結果（毎回 clear_comments は送られる）

use std::sync::Arc;

use crate::domain::{DashboardEvent, MessagePusher, RepositoryError, StoreRepository};

use super::sequencer::CommitSequencer;

/// コメント全削除のユースケース
pub struct ClearCommentsUseCase {
    store: Arc<dyn StoreRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    sequencer: CommitSequencer,
}

impl ClearCommentsUseCase {
    pub fn new(
        store: Arc<dyn StoreRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        sequencer: CommitSequencer,
    ) -> Self {
        Self {
            store,
            message_pusher,
            sequencer,
        }
    }

    /// コメント全削除を実行
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 削除したコメント数（0 件でも clear_comments を送信済み）
    pub async fn execute(&self) -> Result<usize, RepositoryError> {
        let _commit = self.sequencer.enter().await;
        let removed = self.store.clear_comments().await?;

        if let Err(e) = self
            .message_pusher
            .broadcast(&DashboardEvent::ClearComments)
            .await
        {
            tracing::warn!("Failed to broadcast clear_comments: {}", e);
        }
        tracing::info!("Cleared {} comment(s)", removed);

        Ok(removed)
    }
}
