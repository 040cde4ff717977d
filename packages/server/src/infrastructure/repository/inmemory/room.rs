//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! 参加ユーザー列とコメントログを、それぞれ独立した Mutex で保護します。
//!
//! ## ロック順序
//!
//! 両方のロックを取る操作（入退室と snapshot）は必ず users → comments の順に取得します。
//! 片方だけを扱う操作はそのロックだけを取るため、`add_user` と `add_comment` は
//! 互いをブロックしません。

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Comment, RoomRepository, RoomSnapshot, User, UserId};

/// Number of comments retained by default
pub const DEFAULT_COMMENT_CAPACITY: usize = 10;

/// 上限付きのコメントログ（古いものから捨てる FIFO）
#[derive(Debug)]
struct CommentLog {
    comments: VecDeque<Comment>,
    capacity: usize,
}

impl CommentLog {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            // Grows on demand; `capacity` is only the retention limit
            comments: VecDeque::new(),
            capacity,
        }
    }

    fn push(&mut self, comment: Comment) {
        self.comments.push_back(comment);
        while self.comments.len() > self.capacity {
            self.comments.pop_front();
        }
    }

    fn to_vec(&self) -> Vec<Comment> {
        self.comments.iter().cloned().collect()
    }
}

fn remove_by_id(users: &mut Vec<User>, user_id: &UserId) -> bool {
    match users.iter().position(|user| &user.id == user_id) {
        Some(index) => {
            // Vec::remove shifts the tail, keeping join order
            users.remove(index);
            true
        }
        None => false,
    }
}

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    /// 参加順のユーザー列
    users: Mutex<Vec<User>>,
    /// 直近のコメント
    comments: Mutex<CommentLog>,
}

impl InMemoryRoomRepository {
    /// 既定の上限（10 件）で作成
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_COMMENT_CAPACITY)
    }

    /// コメント保持数を指定して作成
    pub fn with_capacity(comment_capacity: usize) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            comments: Mutex::new(CommentLog::with_capacity(comment_capacity)),
        }
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn add_user(&self, user: User) {
        self.users.lock().await.push(user);
    }

    async fn remove_user(&self, user_id: &UserId) {
        let mut users = self.users.lock().await;
        if !remove_by_id(&mut users, user_id) {
            tracing::debug!("User '{}' was not in the room, nothing to remove", user_id);
        }
    }

    async fn add_comment(&self, comment: Comment) {
        self.comments.lock().await.push(comment);
    }

    async fn add_user_with_comment(&self, user: User, comment: Comment) {
        let mut users = self.users.lock().await;
        let mut comments = self.comments.lock().await;
        users.push(user);
        comments.push(comment);
    }

    async fn remove_user_with_comment(&self, user_id: &UserId, comment: Comment) {
        let mut users = self.users.lock().await;
        let mut comments = self.comments.lock().await;
        if !remove_by_id(&mut users, user_id) {
            tracing::debug!("User '{}' was not in the room, nothing to remove", user_id);
        }
        comments.push(comment);
    }

    async fn snapshot(&self) -> RoomSnapshot {
        let users = self.users.lock().await;
        let comments = self.comments.lock().await;
        RoomSnapshot {
            users: users.clone(),
            comments: comments.to_vec(),
        }
    }
}
