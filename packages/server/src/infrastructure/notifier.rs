//! 状態変更の通知（ブロードキャスト型の wake）
//!
//! ドメイン層の `ChangeNotifier` を tokio の `Notify` で実装したもの。
//!
//! ## 契約
//!
//! - `broadcast()` はその時点で待機中の全セッションを起こす。待機者がいなければ何もしない
//! - 通知はキューされない。`changed()` で作った future は、作成後に行われた
//!   `broadcast()` だけを受け取る
//! - 起きた側は必ず snapshot を読み直すこと（変更 1 回につき通知 1 回の保証はない）
//!
//! ルーム状態のロックとは独立しており、ブロードキャストの際に状態ロックは保持しない。

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Notify;

use crate::domain::{ChangeFuture, ChangeNotifier};

/// `ChangeNotifier` backed by `tokio::sync::Notify::notify_waiters`
#[derive(Debug, Default)]
pub struct TokioChangeNotifier {
    notify: Notify,
    version: AtomicU64,
}

impl TokioChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChangeNotifier for TokioChangeNotifier {
    fn broadcast(&self) {
        let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::trace!("Room state changed (version {})", version);
        self.notify.notify_waiters();
    }

    fn changed(&self) -> ChangeFuture<'_> {
        // `Notified` is registered for `notify_waiters` as soon as it exists
        Box::pin(self.notify.notified())
    }

    fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, time::Duration};
    use tokio::time::timeout;

    const WAIT: Duration = Duration::from_millis(100);

    #[tokio::test]
    async fn test_broadcast_without_waiters_is_noop() {
        // テスト項目: 待機者がいない状態でのブロードキャストは何も起こさない
        // given (前提条件):
        let notifier = TokioChangeNotifier::new();

        // when (操作):
        notifier.broadcast();
        notifier.broadcast();

        // then (期待する結果): バージョンだけが進む
        assert_eq!(notifier.version(), 2);
    }

    #[tokio::test]
    async fn test_broadcast_before_wait_is_not_queued() {
        // テスト項目: 待機開始前のブロードキャストは後から作った future に届かない
        // given (前提条件):
        let notifier = TokioChangeNotifier::new();
        notifier.broadcast();

        // when (操作):
        let result = timeout(WAIT, notifier.changed()).await;

        // then (期待する結果): タイムアウトする
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_future_created_before_broadcast_is_woken_without_polling() {
        // テスト項目: 作成済み（未ポーリング）の future はその後のブロードキャストを受け取る
        // given (前提条件):
        let notifier = TokioChangeNotifier::new();
        let changed = notifier.changed();

        // when (操作):
        notifier.broadcast();

        // then (期待する結果):
        assert!(timeout(WAIT, changed).await.is_ok());
    }

    #[tokio::test]
    async fn test_broadcast_wakes_every_waiter() {
        // テスト項目: 1 回のブロードキャストで全ての待機者が起きる
        // given (前提条件):
        let notifier = Arc::new(TokioChangeNotifier::new());
        let (ready_tx, mut ready_rx) = tokio::sync::mpsc::unbounded_channel();
        let waiters: Vec<_> = (0..3)
            .map(|_| {
                let notifier = notifier.clone();
                let ready_tx = ready_tx.clone();
                tokio::spawn(async move {
                    let changed = notifier.changed();
                    ready_tx.send(()).unwrap();
                    changed.await;
                })
            })
            .collect();
        for _ in 0..3 {
            ready_rx.recv().await.unwrap();
        }

        // when (操作):
        notifier.broadcast();

        // then (期待する結果):
        for waiter in waiters {
            assert!(timeout(WAIT, waiter).await.is_ok());
        }
    }
}
