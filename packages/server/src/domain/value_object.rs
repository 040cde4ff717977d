//! Value objects for the chat room.

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// Unique user identifier, generated on join.
///
/// It doubles as the client's session credential for Leave and SendComment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl TryFrom<&str> for UserId {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| ValueObjectError::InvalidUserId(value.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display color slot of a user (0 through 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// Largest valid index
    pub const MAX: u8 = 5;
    /// Number of colors in the palette
    pub const PALETTE_SIZE: usize = Self::MAX as usize + 1;

    pub fn new(value: u8) -> Result<Self, ValueObjectError> {
        if value > Self::MAX {
            return Err(ValueObjectError::ColorOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Index for an arbitrary counter value, reduced modulo the palette size
    pub(crate) fn wrapping(counter: usize) -> Self {
        Self((counter % Self::PALETTE_SIZE) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// User's display name (trimmed, never empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyDisplayName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
