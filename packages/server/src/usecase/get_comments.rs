//! UseCase: コメント一覧取得

use std::sync::Arc;

use crate::domain::{Comment, StoreRepository};

/// コメント一覧取得のユースケース
pub struct GetCommentsUseCase {
    store: Arc<dyn StoreRepository>,
}

impl GetCommentsUseCase {
    pub fn new(store: Arc<dyn StoreRepository>) -> Self {
        Self { store }
    }

    /// 全コメントを古い順に取得
    pub async fn execute(&self) -> Vec<Comment> {
        self.store.list_comments().await
    }
}
