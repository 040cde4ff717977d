//! Real-time group chat room server library.
//!
//! Clients join a single shared room, post comments, and watch a stream of
//! room snapshots that is pushed to them after every change.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
