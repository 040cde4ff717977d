//! WebSocket room state stream handler.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};

use crate::{
    domain::{RoomSnapshot, SnapshotPushError, SnapshotSink},
    infrastructure::dto::websocket::RoomStateMessage,
    ui::state::AppState,
};

/// Pushes snapshots to one client as `room_state` text frames
pub struct WebSocketSnapshotSink {
    sender: SplitSink<WebSocket, Message>,
}

impl WebSocketSnapshotSink {
    pub fn new(sender: SplitSink<WebSocket, Message>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl SnapshotSink for WebSocketSnapshotSink {
    async fn push(&mut self, snapshot: &RoomSnapshot) -> Result<(), SnapshotPushError> {
        let message = RoomStateMessage::from(snapshot.clone());
        let json =
            serde_json::to_string(&message).map_err(|e| SnapshotPushError::Encode(e.to_string()))?;

        self.sender
            .send(Message::Text(json.into()))
            .await
            .map_err(|e| SnapshotPushError::Disconnected(e.to_string()))
    }
}

/// Subscribe to the room state: `GET /ws/state`
pub async fn watch_state_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();
    tracing::info!("Watcher connected");

    let watch = state.watch_state_usecase.clone();
    let mut watch_task = tokio::spawn(async move {
        let mut sink = WebSocketSnapshotSink::new(sender);
        watch.execute(&mut sink).await
    });

    // The stream is push-only; inbound frames matter only as a disconnect signal
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Close(_)) => {
                    tracing::debug!("Watcher requested close");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!("WebSocket read error: {}", e);
                    break;
                }
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        result = &mut watch_task => {
            recv_task.abort();
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::warn!("Watch session failed: {}", e),
                Err(e) => tracing::error!("Watch session task failed: {}", e),
            }
        }
        _ = &mut recv_task => watch_task.abort(),
    };

    tracing::info!("Watcher disconnected");
}
