//! UseCase: コメント送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendCommentUseCase::execute() メソッド
//! - システムコメントフラグの強制解除、空コメントの扱い、投稿者の必須チェック、文字数上限
//!
//! ### なぜこのテストが必要か
//! - クライアントがシステムコメントを偽装できないことを保証する
//! - 空コメントが上限付きログの枠を消費するかどうかは設定で決まる

use std::sync::Arc;

use crate::domain::{ChangeNotifier, Comment, RoomRepository};

use super::error::SendCommentError;

/// Longest comment body accepted by default, in characters
pub const DEFAULT_MAX_COMMENT_CHARS: usize = 156;

/// コメントの受け付け方針
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentPolicy {
    /// 前後の空白を除いて空になる本文を拒否する
    pub reject_empty: bool,
    /// 本文の最大文字数（バイト数ではなく char 単位）
    pub max_chars: usize,
}

impl Default for CommentPolicy {
    fn default() -> Self {
        Self {
            reject_empty: true,
            max_chars: DEFAULT_MAX_COMMENT_CHARS,
        }
    }
}

/// コメント送信のユースケース
pub struct SendCommentUseCase {
    repository: Arc<dyn RoomRepository>,
    notifier: Arc<dyn ChangeNotifier>,
    policy: CommentPolicy,
}

impl SendCommentUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        notifier: Arc<dyn ChangeNotifier>,
        policy: CommentPolicy,
    ) -> Self {
        Self {
            repository,
            notifier,
            policy,
        }
    }

    /// コメント送信を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - コメントをログに追加し、変更を通知した
    /// * `Err(SendCommentError)` - 投稿者が無い、または方針に反する本文（空・長すぎる）
    pub async fn execute(&self, mut comment: Comment) -> Result<(), SendCommentError> {
        // Clients may never author system comments
        comment.is_system = false;

        let Some(commenter) = comment.commenter.as_ref() else {
            return Err(SendCommentError::MissingCommenter);
        };
        if self.policy.reject_empty && comment.body.trim().is_empty() {
            return Err(SendCommentError::EmptyBody);
        }
        if comment.body.chars().count() > self.policy.max_chars {
            return Err(SendCommentError::TooLong {
                max: self.policy.max_chars,
            });
        }

        tracing::info!("Comment from '{}': {}", commenter.name(), comment.body);

        self.repository.add_comment(comment).await;
        self.notifier.broadcast();

        Ok(())
    }
}
