//! UseCase: ルーム状態の取得

use std::sync::Arc;

use crate::domain::{RoomRepository, RoomSnapshot};

/// 現在のルーム状態を 1 回だけ読むユースケース
pub struct GetRoomStateUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomStateUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> RoomSnapshot {
        self.repository.snapshot().await
    }
}
