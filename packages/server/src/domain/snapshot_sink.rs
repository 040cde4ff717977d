//! Outbound side of a watch session.
//!
//! The use case layer pushes snapshots through this trait; the UI layer
//! supplies the concrete transport (a WebSocket in `ui::handler::websocket`).

use async_trait::async_trait;

use super::{RoomSnapshot, SnapshotPushError};

/// Destination of one watcher's snapshot stream
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotSink: Send {
    /// Deliver a snapshot to the watcher.
    ///
    /// Returns `SnapshotPushError::Disconnected` once the peer is gone.
    async fn push(&mut self, snapshot: &RoomSnapshot) -> Result<(), SnapshotPushError>;
}
