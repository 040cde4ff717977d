//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    GetRoomStateUseCase, JoinRoomUseCase, LeaveRoomUseCase, SendCommentUseCase,
    WatchStateUseCase,
};

use super::{
    handler::{
        http::{get_room_state, health_check, join, leave, send_comment},
        websocket::watch_state_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Build the application router over the given state
pub fn build_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // WebSocket エンドポイント
        .route("/ws/state", get(watch_state_handler))
        // HTTP エンドポイント
        .route("/api/join", post(join))
        .route("/api/leave", post(leave))
        .route("/api/comments", post(send_comment))
        .route("/api/room", get(get_room_state))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Chat room server
///
/// This struct encapsulates the use cases and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(join, leave, send_comment, watch_state, get_room_state);
/// server.run("127.0.0.1".to_string(), 30000).await?;
/// ```
pub struct Server {
    join_room_usecase: Arc<JoinRoomUseCase>,
    leave_room_usecase: Arc<LeaveRoomUseCase>,
    send_comment_usecase: Arc<SendCommentUseCase>,
    watch_state_usecase: Arc<WatchStateUseCase>,
    get_room_state_usecase: Arc<GetRoomStateUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        join_room_usecase: Arc<JoinRoomUseCase>,
        leave_room_usecase: Arc<LeaveRoomUseCase>,
        send_comment_usecase: Arc<SendCommentUseCase>,
        watch_state_usecase: Arc<WatchStateUseCase>,
        get_room_state_usecase: Arc<GetRoomStateUseCase>,
    ) -> Self {
        Self {
            join_room_usecase,
            leave_room_usecase,
            send_comment_usecase,
            watch_state_usecase,
            get_room_state_usecase,
        }
    }

    /// Router serving this server's use cases
    pub fn into_router(self) -> Router {
        build_router(Arc::new(AppState {
            join_room_usecase: self.join_room_usecase,
            leave_room_usecase: self.leave_room_usecase,
            send_comment_usecase: self.send_comment_usecase,
            watch_state_usecase: self.watch_state_usecase,
            get_room_state_usecase: self.get_room_state_usecase,
        }))
    }

    /// Run the chat room server until Ctrl+C / SIGTERM
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 30000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.into_router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!("Chat room server listening on {}", listener.local_addr()?);
        tracing::info!("Watch room state at: ws://{}/ws/state", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
