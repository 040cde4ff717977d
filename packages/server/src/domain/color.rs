//! Round-robin display color assignment.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::value_object::ColorIndex;

/// Hands out color indices 0, 1, ..., 5, 0, 1, ... to joining users.
///
/// The rotation follows the allocator's own counter, not the member count, so a
/// color freed by a leaving user is not handed out again early.
#[derive(Debug, Default)]
pub struct ColorAllocator {
    next: AtomicUsize,
}

impl ColorAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next color.
    ///
    /// Read and advance happen in one atomic step, so concurrent joins never
    /// receive the same slot within a rotation.
    pub fn next(&self) -> ColorIndex {
        let current = self
            .next
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some((current + 1) % ColorIndex::PALETTE_SIZE)
            })
            .unwrap_or_else(|current| current);
        ColorIndex::wrapping(current)
    }
}
