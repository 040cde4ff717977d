//! In-memory repository implementations.

mod room;

pub use room::{DEFAULT_COMMENT_CAPACITY, InMemoryRoomRepository};
