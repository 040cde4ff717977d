//! Data Transfer Objects (DTOs) for the chat room.
//!
//! DTOs are organized by protocol:
//! - `http`: request and response bodies of the unary HTTP API
//! - `websocket`: frames pushed on the room state stream

pub mod conversion;
pub mod http;
pub mod websocket;
