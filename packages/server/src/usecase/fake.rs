//! ユースケースのテスト用 fake
//!
//! Repository と ChangeNotifier の呼び出しを 1 本のイベント列に記録する。
//! 「状態を変更してから 1 回だけ通知する」という順序をテストで確認するために使う。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    domain::{
        ChangeFuture, ChangeNotifier, Comment, RoomRepository, RoomSnapshot, User, UserId,
    },
    infrastructure::{notifier::TokioChangeNotifier, repository::InMemoryRoomRepository},
};

/// 呼び出された操作の名前を順に記録する
#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<&'static str>>>);

impl EventLog {
    fn record(&self, event: &'static str) {
        self.0.lock().unwrap().push(event);
    }

    /// 記録済みのイベント（`snapshot` の読み取りは含まない）
    pub fn events(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

/// 書き込み操作を記録してから InMemoryRoomRepository に委譲する
pub struct RecordingRepository {
    inner: InMemoryRoomRepository,
    log: EventLog,
}

#[async_trait]
impl RoomRepository for RecordingRepository {
    async fn add_user(&self, user: User) {
        self.log.record("add_user");
        self.inner.add_user(user).await;
    }

    async fn remove_user(&self, user_id: &UserId) {
        self.log.record("remove_user");
        self.inner.remove_user(user_id).await;
    }

    async fn add_comment(&self, comment: Comment) {
        self.log.record("add_comment");
        self.inner.add_comment(comment).await;
    }

    async fn add_user_with_comment(&self, user: User, comment: Comment) {
        self.log.record("add_user_with_comment");
        self.inner.add_user_with_comment(user, comment).await;
    }

    async fn remove_user_with_comment(&self, user_id: &UserId, comment: Comment) {
        self.log.record("remove_user_with_comment");
        self.inner.remove_user_with_comment(user_id, comment).await;
    }

    async fn snapshot(&self) -> RoomSnapshot {
        self.inner.snapshot().await
    }
}

/// ブロードキャストを記録してから TokioChangeNotifier に委譲する
pub struct RecordingNotifier {
    inner: TokioChangeNotifier,
    log: EventLog,
}

impl ChangeNotifier for RecordingNotifier {
    fn broadcast(&self) {
        self.log.record("broadcast");
        self.inner.broadcast();
    }

    fn changed(&self) -> ChangeFuture<'_> {
        self.inner.changed()
    }

    fn version(&self) -> u64 {
        self.inner.version()
    }
}

/// イベント列を共有する repository と notifier の組を作る
pub fn recorder() -> (EventLog, Arc<RecordingRepository>, Arc<RecordingNotifier>) {
    let log = EventLog::default();
    let repository = Arc::new(RecordingRepository {
        inner: InMemoryRoomRepository::new(),
        log: log.clone(),
    });
    let notifier = Arc::new(RecordingNotifier {
        inner: TokioChangeNotifier::new(),
        log: log.clone(),
    });
    (log, repository, notifier)
}
