//! UseCase: ジョブ登録処理
//!
//! ### どのような状況を想定しているか
//! - 正常系：pending のジョブが追加され、全接続に new_job が届く
//! - 異常系：url が空または欠落（保存もブロードキャストもされない）

use std::sync::Arc;

use chathub_shared::time::Clock;

use crate::domain::{
    DashboardEvent, IdFactory, Job, JobUrl, MessagePusher, StoreRepository, Timestamp,
};

use super::{error::SubmitError, sequencer::CommitSequencer};

/// ジョブ登録のユースケース
pub struct SubmitJobUseCase {
    store: Arc<dyn StoreRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
    sequencer: CommitSequencer,
}

impl SubmitJobUseCase {
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

    /// ジョブ登録を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Job)` - 保存されたジョブ（status は常に pending）
    /// * `Err(SubmitError::Validation)` - url が空（副作用なし）
    pub async fn execute(&self, url: Option<String>) -> Result<Job, SubmitError> {
        let url = JobUrl::new(url.unwrap_or_default())?;

        let _commit = self.sequencer.enter().await;
        let created_at = Timestamp::new(self.clock.now_millis());
        let job = Job::new(IdFactory::job_id(created_at), url);
        self.store.add_job(job.clone()).await?;

        if let Err(e) = self
            .message_pusher
            .broadcast(&DashboardEvent::NewJob(job.clone()))
            .await
        {
            tracing::warn!("Failed to broadcast new_job '{}': {}", job.id, e);
        }
        tracing::info!(
            "Job '{}' for {} stored as {}",
            job.id,
            job.url,
            job.status.as_str()
        );

        Ok(job)
    }
}
