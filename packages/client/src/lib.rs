//! Terminal client for the Hiroba chat room.
//!
//! Joins the room over HTTP, renders every room snapshot pushed on the
//! WebSocket stream, and sends typed lines as comments.

pub mod api;
mod domain;
pub mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use runner::run_client;
