//! Domain layer for the chat room.
//!
//! This module contains business rules that are independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod change_notifier;
pub mod color;
pub mod entity;
pub mod error;
pub mod repository;
pub mod snapshot_sink;
pub mod value_object;

pub use change_notifier::{ChangeFuture, ChangeNotifier};
pub use color::ColorAllocator;
pub use entity::{Comment, Gender, Profile, RoomSnapshot, User};
pub use error::{SnapshotPushError, ValueObjectError};
pub use repository::RoomRepository;
pub use snapshot_sink::SnapshotSink;
pub use value_object::{ColorIndex, DisplayName, UserId};
