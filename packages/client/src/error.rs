//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with an error status
    #[error("Request rejected by server ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Could not reach the server
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// An established stream dropped
    #[error("Connection lost: {0}")]
    ConnectionLost(String),

    /// The server sent something we could not decode
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Terminal input failed or was cancelled
    #[error("Input error: {0}")]
    Input(String),

    /// A background task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(String),
}
