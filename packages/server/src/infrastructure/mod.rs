//! Infrastructure layer: concrete store, change notification and wire DTOs.

pub mod dto;
pub mod notifier;
pub mod repository;
