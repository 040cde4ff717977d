//! Repository trait 定義
//!
//! ドメイン層が必要とするルーム状態ストアのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{Comment, RoomSnapshot, User, UserId};

/// Room Repository trait
///
/// 参加ユーザー列とコメントログの 2 つのコレクションを保持するストア。
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
///
/// ## 一貫性
///
/// - 単一コレクションの操作は、そのコレクションのロックだけを取る
/// - `add_user_with_comment` / `remove_user_with_comment` と `snapshot` は
///   両方のロックを取るため、入退室の途中状態が snapshot に見えることはない
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// ユーザーを参加順の末尾に追加
    async fn add_user(&self, user: User);

    /// ユーザーを削除（存在しなければ何もしない）
    async fn remove_user(&self, user_id: &UserId);

    /// コメントを追加し、上限を超えた古いコメントを捨てる
    async fn add_comment(&self, comment: Comment);

    /// ユーザー追加とシステムコメント追加を 1 つの操作として適用
    async fn add_user_with_comment(&self, user: User, comment: Comment);

    /// ユーザー削除とシステムコメント追加を 1 つの操作として適用
    async fn remove_user_with_comment(&self, user_id: &UserId, comment: Comment);

    /// 現在のルーム状態を取得
    async fn snapshot(&self) -> RoomSnapshot;
}
