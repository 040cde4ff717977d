//! Terminal client for the Hiroba chat room.
//!
//! Joins the room, redraws the screen whenever the room changes, and sends
//! each entered line as a comment. Ctrl+C or Ctrl+D leaves the room.
//! The room state stream reconnects automatically (max 5 attempts with 5
//! second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-client -- --name Alice
//! cargo run --bin hiroba-client -- -u http://127.0.0.1:30000 -a 12
//! ```

use clap::Parser;

use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-client")]
#[command(about = "Terminal client for the Hiroba chat room", long_about = None)]
struct Args {
    /// Server base URL
    #[arg(short = 'u', long, default_value = "http://127.0.0.1:30000")]
    url: String,

    /// Display name; asked for interactively when omitted
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Age shown in the profile
    #[arg(short = 'a', long, default_value_t = 10)]
    age: u32,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr; keep them quiet so they do not fight the screen
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();

    if let Err(e) = hiroba_client::run_client(args.url, args.name, args.age).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
