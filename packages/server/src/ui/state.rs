//! Server state shared by all handlers.

use std::sync::Arc;

use crate::usecase::{
    GetRoomStateUseCase, JoinRoomUseCase, LeaveRoomUseCase, SendCommentUseCase,
    WatchStateUseCase,
};

/// Shared application state
pub struct AppState {
    /// JoinRoomUseCase（入室のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// LeaveRoomUseCase（退室のユースケース）
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    /// SendCommentUseCase（コメント送信のユースケース）
    pub send_comment_usecase: Arc<SendCommentUseCase>,
    /// WatchStateUseCase（ルーム状態監視のユースケース）
    pub watch_state_usecase: Arc<WatchStateUseCase>,
    /// GetRoomStateUseCase（ルーム状態取得のユースケース）
    pub get_room_state_usecase: Arc<GetRoomStateUseCase>,
}
