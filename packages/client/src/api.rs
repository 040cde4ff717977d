//! HTTP calls against the room server.

use hiroba_server::infrastructure::dto::http::{
    CommentDto, ErrorResponseDto, ProfileDto, UserDto,
};
use reqwest::{Client, Response};

use crate::{domain::watch_url, error::ClientError};

/// Thin reqwest wrapper for the `/api/*` endpoints
#[derive(Debug, Clone)]
pub struct RoomApi {
    http: Client,
    base_url: String,
}

impl RoomApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// WebSocket URL of the room state stream
    pub fn watch_url(&self) -> String {
        watch_url(&self.base_url)
    }

    /// Join the room; the server assigns the id and color
    pub async fn join(&self, profile: &ProfileDto) -> Result<UserDto, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/join", self.base_url))
            .json(profile)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

        check_status(response)
            .await?
            .json::<UserDto>()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    pub async fn leave(&self, user: &UserDto) -> Result<(), ClientError> {
        let response = self
            .http
            .post(format!("{}/api/leave", self.base_url))
            .json(user)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

        check_status(response).await.map(|_| ())
    }

    pub async fn send_comment(&self, user: &UserDto, body: String) -> Result<(), ClientError> {
        let comment = CommentDto {
            body,
            commenter: Some(user.clone()),
            is_system_comment: false,
        };

        let response = self
            .http
            .post(format!("{}/api/comments", self.base_url))
            .json(&comment)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

        check_status(response).await.map(|_| ())
    }
}

/// Turn an error status into `ClientError::Rejected`, reading the server's
/// `{"error": ...}` body when there is one.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponseDto>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}
