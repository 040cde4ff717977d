//! WebSocket frame DTOs for the room state stream.

use serde::{Deserialize, Serialize};

use super::http::{CommentDto, UserDto};

/// Kind of frame pushed on the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    RoomState,
}

/// Full room snapshot, pushed on subscribe and after every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStateMessage {
    pub r#type: MessageType,
    pub joined_users: Vec<UserDto>,
    pub latest_comments: Vec<CommentDto>,
}
