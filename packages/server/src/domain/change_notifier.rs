//! 状態変更通知の抽象化
//!
//! ユースケース層はこの trait を通して watch セッションを起こす。
//! 具体的な実装（tokio の `Notify` を使うもの）は infrastructure 層にある。

use std::{future::Future, pin::Pin};

/// `changed()` が返す future
pub type ChangeFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Wakes every waiting watch session after a room state change
///
/// - `broadcast()` はその時点で待機中の全員を起こす。待機者がいなければ何もしない
/// - 通知はキューされない
pub trait ChangeNotifier: Send + Sync {
    /// Wake all sessions currently waiting on a `changed()` future.
    fn broadcast(&self);

    /// Future resolving on the first `broadcast()` issued after this call.
    ///
    /// Interest must be registered when the future is created, not when it is
    /// first polled: callers create it *before* reading the state they send.
    fn changed(&self) -> ChangeFuture<'_>;

    /// Number of broadcasts issued so far
    fn version(&self) -> u64;
}
