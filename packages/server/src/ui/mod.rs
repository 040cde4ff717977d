//! HTTP / WebSocket front end of the chat room server.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::{Server, build_router};
