//! HTTP API DTOs.

use serde::{Deserialize, Serialize};

/// Gender on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderDto {
    #[default]
    Unspecified,
    Man,
    Woman,
}

/// Join request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: GenderDto,
}

/// Joined user; the join response and the leave request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    /// UUID string
    pub id: String,
    pub profile: ProfileDto,
    /// Color index, 0 through 5
    pub color: u8,
}

/// Comment; the send-comment request body and an element of the room state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDto {
    pub body: String,
    #[serde(default)]
    pub commenter: Option<UserDto>,
    #[serde(default)]
    pub is_system_comment: bool,
}

/// Response of `GET /api/room`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStateDto {
    pub joined_users: Vec<UserDto>,
    pub latest_comments: Vec<CommentDto>,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}
