//! Real-time group chat room server.
//!
//! Clients join over HTTP, post comments, and receive the whole room state on
//! a WebSocket every time it changes.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 0.0.0.0 --port 3000 --history-size 20
//! ```

use std::sync::Arc;

use clap::Parser;
use hiroba_server::{
    domain::ColorAllocator,
    infrastructure::{
        notifier::TokioChangeNotifier,
        repository::{InMemoryRoomRepository, inmemory::DEFAULT_COMMENT_CAPACITY},
    },
    ui::Server,
    usecase::{
        CommentPolicy, DEFAULT_MAX_COMMENT_CHARS, GetRoomStateUseCase, JoinRoomUseCase,
        LeaveRoomUseCase, SendCommentUseCase, WatchStateUseCase,
    },
};
use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-server")]
#[command(about = "Real-time group chat room server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "30000")]
    port: u16,

    /// Number of recent comments kept in the room (1 to 1000)
    #[arg(
        long,
        default_value_t = DEFAULT_COMMENT_CAPACITY,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=1000)
    )]
    history_size: usize,

    /// Accept comments whose body is empty after trimming
    #[arg(long)]
    allow_empty_comments: bool,

    /// Longest accepted comment body, in characters
    #[arg(long, default_value_t = DEFAULT_MAX_COMMENT_CHARS)]
    max_comment_length: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository, color allocator and change notifier
    // 2. UseCases
    // 3. Server

    // 1. Shared room state
    let repository = Arc::new(InMemoryRoomRepository::with_capacity(args.history_size));
    let colors = Arc::new(ColorAllocator::new());
    let notifier = Arc::new(TokioChangeNotifier::new());
    let policy = CommentPolicy {
        reject_empty: !args.allow_empty_comments,
        max_chars: args.max_comment_length,
    };
    tracing::info!(
        "Room created (history size: {}, reject empty comments: {}, max comment length: {})",
        args.history_size,
        policy.reject_empty,
        policy.max_chars
    );

    // 2. Create UseCases
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(
        repository.clone(),
        colors,
        notifier.clone(),
    ));
    let leave_room_usecase = Arc::new(LeaveRoomUseCase::new(
        repository.clone(),
        notifier.clone(),
    ));
    let send_comment_usecase = Arc::new(SendCommentUseCase::new(
        repository.clone(),
        notifier.clone(),
        policy,
    ));
    let watch_state_usecase = Arc::new(WatchStateUseCase::new(repository.clone(), notifier));
    let get_room_state_usecase = Arc::new(GetRoomStateUseCase::new(repository));

    // 3. Create and run the server
    let server = Server::new(
        join_room_usecase,
        leave_room_usecase,
        send_comment_usecase,
        watch_state_usecase,
        get_room_state_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
