//! UseCase: 入室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - ユーザー生成（ID、色）、ユーザー列への追加、入室コメントの追加、変更通知
//!
//! ### なぜこのテストが必要か
//! - 入室順・ID の一意性・色のローテーションは全クライアントの表示に直結する
//! - 入室コメントとユーザー追加が 1 つの操作として見えることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：単独の入室、連続した入室
//! - エッジケース：7 人目以降で色が 0 に戻る

use std::sync::Arc;

use crate::domain::{
    ChangeNotifier, ColorAllocator, Comment, Profile, RoomRepository, User, UserId,
};

/// 入室のユースケース
pub struct JoinRoomUseCase {
    /// Repository（ルーム状態ストアの抽象化）
    repository: Arc<dyn RoomRepository>,
    /// 色の割り当て
    colors: Arc<ColorAllocator>,
    /// ChangeNotifier（変更通知の抽象化）
    notifier: Arc<dyn ChangeNotifier>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        colors: Arc<ColorAllocator>,
        notifier: Arc<dyn ChangeNotifier>,
    ) -> Self {
        Self {
            repository,
            colors,
            notifier,
        }
    }

    /// 入室を実行
    ///
    /// # Returns
    ///
    /// 生成したユーザー。クライアントは以降の Leave / SendComment でこの ID を使う。
    pub async fn execute(&self, profile: Profile) -> User {
        let user = User::new(UserId::generate(), profile, self.colors.next());
        let comment = Comment::entered(user.name());

        self.repository
            .add_user_with_comment(user.clone(), comment)
            .await;
        self.notifier.broadcast();

        tracing::info!(
            "User '{}' ({}) joined with color {}",
            user.name(),
            user.id,
            user.color.value()
        );

        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{DisplayName, Gender},
        infrastructure::{notifier::TokioChangeNotifier, repository::InMemoryRoomRepository},
        usecase::fake::recorder,
    };
    use std::{collections::HashSet, time::Duration};

    struct Fixture {
        repository: Arc<InMemoryRoomRepository>,
        notifier: Arc<TokioChangeNotifier>,
        usecase: JoinRoomUseCase,
    }

    fn create_fixture() -> Fixture {
        let repository = Arc::new(InMemoryRoomRepository::new());
        let notifier = Arc::new(TokioChangeNotifier::new());
        let usecase = JoinRoomUseCase::new(
            repository.clone(),
            Arc::new(ColorAllocator::new()),
            notifier.clone(),
        );
        Fixture {
            repository,
            notifier,
            usecase,
        }
    }

    fn profile(name: &str) -> Profile {
        Profile::new(DisplayName::new(name).unwrap(), 10, Gender::Man)
    }

    #[tokio::test]
    async fn test_join_adds_user_and_system_comment() {
        // テスト項目: 入室でユーザーと入室コメントが追加される
        // given (前提条件):
        let fixture = create_fixture();

        // when (操作):
        let alice = fixture.usecase.execute(profile("Alice")).await;

        // then (期待する結果):
        let snapshot = fixture.repository.snapshot().await;
        assert_eq!(snapshot.users, vec![alice.clone()]);
        assert_eq!(alice.color.value(), 0);
        assert_eq!(snapshot.comments.len(), 1);
        assert_eq!(snapshot.comments[0].body, "Alice has entered the room.");
        assert!(snapshot.comments[0].is_system);
    }

    #[tokio::test]
    async fn test_join_preserves_order_and_unique_ids() {
        // テスト項目: 連続した入室で順序が保たれ、ID は全て異なる
        // given (前提条件):
        let fixture = create_fixture();
        let names = ["alice", "bob", "charlie", "dave"];

        // when (操作):
        let mut joined = Vec::new();
        for name in names {
            joined.push(fixture.usecase.execute(profile(name)).await);
        }

        // then (期待する結果):
        let snapshot = fixture.repository.snapshot().await;
        let order: Vec<&str> = snapshot.users.iter().map(|u| u.name().as_str()).collect();
        assert_eq!(order, names.to_vec());
        let ids: HashSet<UserId> = joined.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), names.len());
    }

    #[tokio::test]
    async fn test_join_colors_rotate() {
        // テスト項目: 8 人の入室で色が 0,1,2,3,4,5,0,1 となる
        // given (前提条件):
        let fixture = create_fixture();

        // when (操作):
        let mut colors = Vec::new();
        for i in 0..8 {
            let user = fixture.usecase.execute(profile(&format!("user{}", i))).await;
            colors.push(user.color.value());
        }

        // then (期待する結果):
        assert_eq!(colors, vec![0, 1, 2, 3, 4, 5, 0, 1]);
    }

    #[tokio::test]
    async fn test_join_broadcasts_change() {
        // テスト項目: 入室すると待機中の watcher が起こされる
        // given (前提条件):
        let fixture = create_fixture();
        let changed = fixture.notifier.changed();

        // when (操作):
        fixture.usecase.execute(profile("Alice")).await;

        // then (期待する結果):
        assert!(
            tokio::time::timeout(Duration::from_millis(100), changed)
                .await
                .is_ok()
        );
        assert_eq!(fixture.notifier.version(), 1);
    }

    #[tokio::test]
    async fn test_join_broadcasts_once_after_mutation() {
        // テスト項目: 入室は複合操作で状態を変更し、その後に 1 回だけ通知する
        // given (前提条件):
        let (log, repository, notifier) = recorder();
        let usecase = JoinRoomUseCase::new(repository, Arc::new(ColorAllocator::new()), notifier);

        // when (操作):
        usecase.execute(profile("Alice")).await;

        // then (期待する結果):
        assert_eq!(log.events(), vec!["add_user_with_comment", "broadcast"]);
    }
}
