//! UseCase: 退室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveRoomUseCase::execute() メソッド
//! - ユーザー列からの削除、退室コメントの追加、変更通知
//!
//! ### どのような状況を想定しているか
//! - 正常系：入室と退室が交互に起きても、残りのユーザーは入室順のまま
//! - エッジケース：存在しないユーザーの退室（削除は何もしない）
//! - シナリオ：Alice と Bob の入室、コメント、Alice の退室

use std::sync::Arc;

use crate::domain::{ChangeNotifier, Comment, RoomRepository, User};

/// 退室のユースケース
pub struct LeaveRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl LeaveRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// 退室を実行
    ///
    /// ユーザーがすでにいない場合も退室コメントは追加される。
    pub async fn execute(&self, user: User) {
        let comment = Comment::left(user.name());

        self.repository
            .remove_user_with_comment(&user.id, comment)
            .await;
        self.notifier.broadcast();

        tracing::info!("User '{}' ({}) left", user.name(), user.id);
    }
}
