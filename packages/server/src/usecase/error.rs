//! UseCase error types.

use thiserror::Error;

use crate::domain::SnapshotPushError;

/// SendComment errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendCommentError {
    /// The comment does not name its author
    #[error("Comment has no commenter")]
    MissingCommenter,

    /// The body is empty after trimming and the policy rejects empty comments
    #[error("Comment body must not be empty")]
    EmptyBody,

    /// The body is longer than the policy allows
    #[error("Comment body must be at most {max} characters")]
    TooLong { max: usize },
}

/// Watch session errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchStateError {
    /// Pushing a snapshot failed for a reason other than the peer leaving
    #[error("Failed to push room state: {0}")]
    Push(SnapshotPushError),
}
