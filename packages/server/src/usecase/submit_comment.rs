//! UseCase: コメント投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SubmitCommentUseCase::execute() メソッド
//! - 入力検証、ID とタイムスタンプのサーバ側生成、Store への追加、ブロードキャスト
//!
//! ### どのような状況を想定しているか
//! - 正常系：コメントが追加され、全接続に new_comment が届く
//! - 異常系：userName / text が空または欠落（保存もブロードキャストもされない）
//! - エッジケース：workerId の欠落（unknown が記録される）

use std::sync::Arc;

use chathub_shared::time::Clock;

use crate::domain::{
    Comment, CommentText, DashboardEvent, IdFactory, MessagePusher, StoreRepository, Timestamp,
    UserName, WorkerRef,
};

use super::{error::SubmitError, sequencer::CommitSequencer};

/// コメント投稿のユースケース
pub struct SubmitCommentUseCase {
    store: Arc<dyn StoreRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
    sequencer: CommitSequencer,
}

impl SubmitCommentUseCase {
    pub fn new(
        store: Arc<dyn StoreRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
        sequencer: CommitSequencer,
    ) -> Self {
        Self {
            store,
            message_pusher,
            clock,
            sequencer,
        }
    }

    /// コメント投稿を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Comment)` - 保存されたコメント（ID とタイムスタンプはサーバ側で生成）
    /// * `Err(SubmitError::Validation)` - userName または text が空（副作用なし）
    pub async fn execute(
        &self,
        user_name: Option<String>,
        text: Option<String>,
        worker_id: Option<String>,
    ) -> Result<Comment, SubmitError> {
        // 1. 状態に触れる前に検証
        let user_name = UserName::new(user_name.unwrap_or_default())?;
        let text = CommentText::new(text.unwrap_or_default())?;
        let worker_id = WorkerRef::or_unknown(worker_id);

        // 2. 追加とブロードキャストを一つのコミットとして実行
        let _commit = self.sequencer.enter().await;
        let timestamp = Timestamp::new(self.clock.now_millis());
        let comment = Comment::new(
            IdFactory::comment_id(timestamp),
            user_name,
            text,
            worker_id,
            timestamp,
        );
        self.store.add_comment(comment.clone()).await?;

        if let Err(e) = self
            .message_pusher
            .broadcast(&DashboardEvent::NewComment(comment.clone()))
            .await
        {
            tracing::warn!("Failed to broadcast new_comment '{}': {}", comment.id, e);
        }
        tracing::info!(
            "Comment '{}' from '{}' stored (worker '{}')",
            comment.id,
            comment.user_name,
            comment.worker_id
        );

        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ValueObjectError, message_pusher::MockMessagePusher},
        usecase::testing::{Fixture, NOW, drain},
    };

    fn usecase(f: &Fixture) -> SubmitCommentUseCase {
        SubmitCommentUseCase::new(
            f.store.clone(),
            f.pusher.clone(),
            f.clock.clone(),
            f.sequencer.clone(),
        )
    }

    #[tokio::test]
    async fn test_submit_comment_success_broadcasts_to_all() {
        // テスト項目: コメントが保存され、全接続に new_comment が一度だけ届く
        // given (前提条件):
        let f = Fixture::new();
        let mut dashboard = f.listen("dashboard").await;
        let mut worker = f.listen("worker").await;
        let usecase = usecase(&f);

        // when (操作):
        let comment = usecase
            .execute(Some("Alice".to_string()), Some("hi".to_string()), None)
            .await
            .unwrap();

        // then (期待する結果):
        assert!(!comment.id.as_str().is_empty());
        assert_eq!(comment.user_name.as_str(), "Alice");
        assert_eq!(comment.text.as_str(), "hi");
        assert_eq!(comment.worker_id.as_str(), "unknown");
        assert_eq!(comment.timestamp, Timestamp::new(NOW));

        let stored = f.store.list_comments().await;
        assert_eq!(stored, vec![comment.clone()]);

        for rx in [&mut dashboard, &mut worker] {
            let frames = drain(rx);
            assert_eq!(frames.len(), 1);
            assert_eq!(frames[0]["event"], "new_comment");
            assert_eq!(frames[0]["data"]["id"], comment.id.as_str());
            assert_eq!(frames[0]["data"]["userName"], "Alice");
        }
    }

    #[tokio::test]
    async fn test_submit_comment_appends_after_previous() {
        // テスト項目: 新しいコメントは既存コメントの後ろに追加される
        // given (前提条件):
        let f = Fixture::new();
        let usecase = usecase(&f);
        let first = usecase
            .execute(Some("a".to_string()), Some("1".to_string()), None)
            .await
            .unwrap();

        // when (操作):
        let second = usecase
            .execute(
                Some("b".to_string()),
                Some("2".to_string()),
                Some("W1".to_string()),
            )
            .await
            .unwrap();

        // then (期待する結果):
        let stored = f.store.list_comments().await;
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, first.id);
        assert_eq!(stored[1].id, second.id);
        assert_ne!(first.id, second.id);
        assert_eq!(stored[1].worker_id.as_str(), "W1");
    }

    #[tokio::test]
    async fn test_submit_comment_rejects_missing_fields_without_side_effects() {
        // テスト項目: userName / text が空・欠落の場合、保存もブロードキャストもされない
        // given (前提条件):
        let f = Fixture::new();
        let mut pusher = MockMessagePusher::new();
        pusher.expect_broadcast().never();
        let usecase = SubmitCommentUseCase::new(
            f.store.clone(),
            Arc::new(pusher),
            f.clock.clone(),
            f.sequencer.clone(),
        );

        // when (操作):
        let missing_user = usecase.execute(None, Some("hi".to_string()), None).await;
        let empty_text = usecase
            .execute(Some("Alice".to_string()), Some(String::new()), None)
            .await;

        // then (期待する結果):
        assert_eq!(
            missing_user,
            Err(SubmitError::Validation(ValueObjectError::Empty("userName")))
        );
        assert_eq!(
            empty_text,
            Err(SubmitError::Validation(ValueObjectError::Empty("text")))
        );
        assert!(f.store.list_comments().await.is_empty());
    }
}
