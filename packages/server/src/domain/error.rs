//! Domain error types.

use thiserror::Error;

/// Value object validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// Display name is empty or whitespace only
    #[error("Display name must not be empty")]
    EmptyDisplayName,

    /// User ID is not a valid UUID
    #[error("Invalid user ID '{0}'")]
    InvalidUserId(String),

    /// Color index is outside the palette
    #[error("Color index {0} is out of range (0..={max})", max = crate::domain::ColorIndex::MAX)]
    ColorOutOfRange(u8),
}

/// Errors raised while pushing a snapshot to a watcher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotPushError {
    /// The peer closed the stream or the connection dropped
    #[error("Watcher disconnected: {0}")]
    Disconnected(String),

    /// The snapshot could not be encoded for the wire
    #[error("Failed to encode snapshot: {0}")]
    Encode(String),
}
