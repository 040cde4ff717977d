//! UseCase layer: the room's request handlers and the watch session loop.

mod error;
#[cfg(test)]
mod fake;
mod get_room_state;
mod join_room;
mod leave_room;
mod send_comment;
mod watch_state;

pub use error::{SendCommentError, WatchStateError};
pub use get_room_state::GetRoomStateUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use send_comment::{CommentPolicy, DEFAULT_MAX_COMMENT_CHARS, SendCommentUseCase};
pub use watch_state::WatchStateUseCase;
