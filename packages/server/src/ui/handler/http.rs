//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    domain::{Comment, Profile, User},
    infrastructure::dto::http::{
        CommentDto, ErrorResponseDto, ProfileDto, RoomStateDto, UserDto,
    },
    ui::state::AppState,
    usecase::SendCommentError,
};

/// Error response: status code plus `{"error": ...}` body
pub type ApiError = (StatusCode, Json<ErrorResponseDto>);

fn bad_request(message: impl ToString) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponseDto {
            error: message.to_string(),
        }),
    )
}

/// Join the room: `POST /api/join`
pub async fn join(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<ProfileDto>,
) -> Result<Json<UserDto>, ApiError> {
    let profile = Profile::try_from(profile).map_err(|e| {
        tracing::warn!("Rejected join request: {}", e);
        bad_request(e)
    })?;

    let user = state.join_room_usecase.execute(profile).await;

    Ok(Json(user.into()))
}

/// Leave the room: `POST /api/leave`
pub async fn leave(
    State(state): State<Arc<AppState>>,
    Json(user): Json<UserDto>,
) -> Result<StatusCode, ApiError> {
    let user = User::try_from(user).map_err(|e| {
        tracing::warn!("Rejected leave request: {}", e);
        bad_request(e)
    })?;

    state.leave_room_usecase.execute(user).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Post a comment: `POST /api/comments`
pub async fn send_comment(
    State(state): State<Arc<AppState>>,
    Json(comment): Json<CommentDto>,
) -> Result<StatusCode, ApiError> {
    let comment = Comment::try_from(comment).map_err(|e| {
        tracing::warn!("Rejected comment: {}", e);
        bad_request(e)
    })?;

    state
        .send_comment_usecase
        .execute(comment)
        .await
        .map_err(|e: SendCommentError| {
            tracing::warn!("Rejected comment: {}", e);
            bad_request(e)
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Current room state: `GET /api/room`
pub async fn get_room_state(State(state): State<Arc<AppState>>) -> Json<RoomStateDto> {
    let snapshot = state.get_room_state_usecase.execute().await;
    Json(snapshot.into())
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
