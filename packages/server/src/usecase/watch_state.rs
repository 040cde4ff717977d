//! UseCase: ルーム状態の監視（watch セッション）
//!
//! 1 クライアントにつき 1 つ実行されるループ。
//!
//! 1. SendingSnapshot: 現在の snapshot を sink に送る。送信失敗（切断）でセッション終了
//! 2. AwaitingChange: 次の変更通知まで待ち、起きたら 1. に戻る
//!
//! 通知の受け取り登録は snapshot を読む *前* に行う。読み取りから待機開始までの間に
//! 起きた変更でも、セッションは必ず起こされる。
//!
//! ## テスト実装の作業記録
//!
//! ### どのような状況を想定しているか
//! - 正常系：購読直後に現在の状態が届き、変更のたびに最新状態が届く
//! - 複数セッション：同じ変更に対して同じ snapshot が届く
//! - 終了：切断された sink では正常終了、それ以外の送信エラーではエラー終了
//! - 競合：snapshot の読み取り中に起きた変更でも、次の snapshot が必ず届く

use std::sync::Arc;

use crate::domain::{ChangeNotifier, RoomRepository, SnapshotPushError, SnapshotSink};

use super::error::WatchStateError;

/// ルーム状態監視のユースケース
pub struct WatchStateUseCase {
    repository: Arc<dyn RoomRepository>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl WatchStateUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// watch セッションを実行
    ///
    /// 戻るのは sink への送信が失敗したときだけ。
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 相手が切断した（通常の終了）
    /// * `Err(WatchStateError)` - それ以外の理由で送信できなかった
    pub async fn execute<S>(&self, sink: &mut S) -> Result<(), WatchStateError>
    where
        S: SnapshotSink + ?Sized,
    {
        let mut pushed: u64 = 0;

        loop {
            // SendingSnapshot
            let changed = self.notifier.changed();
            let snapshot = self.repository.snapshot().await;

            match sink.push(&snapshot).await {
                Ok(()) => pushed += 1,
                Err(SnapshotPushError::Disconnected(reason)) => {
                    tracing::debug!(
                        "Watcher disconnected after {} snapshots: {}",
                        pushed,
                        reason
                    );
                    return Ok(());
                }
                Err(e) => return Err(WatchStateError::Push(e)),
            }

            // AwaitingChange
            changed.await;
            tracing::trace!(
                "Watcher woke at version {}, re-reading room state",
                self.notifier.version()
            );
        }
    }
}
