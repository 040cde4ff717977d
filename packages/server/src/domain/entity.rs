//! Domain entities for the chat room.

use super::value_object::{ColorIndex, DisplayName, UserId};

/// Self-reported gender of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Unspecified,
    Man,
    Woman,
}

/// Profile supplied by the client at join time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: DisplayName,
    pub age: u32,
    pub gender: Gender,
}

impl Profile {
    pub fn new(name: DisplayName, age: u32, gender: Gender) -> Self {
        Self { name, age, gender }
    }
}

/// A member of the room
///
/// Created on join and removed on leave; never mutated in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub profile: Profile,
    pub color: ColorIndex,
}

impl User {
    pub fn new(id: UserId, profile: Profile, color: ColorIndex) -> Self {
        Self { id, profile, color }
    }

    pub fn name(&self) -> &DisplayName {
        &self.profile.name
    }
}

/// A line in the room's comment log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub body: String,
    /// Author of the comment, `None` for system comments
    pub commenter: Option<User>,
    pub is_system: bool,
}

impl Comment {
    /// Comment posted by a user
    pub fn from_user(commenter: User, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            commenter: Some(commenter),
            is_system: false,
        }
    }

    /// Announcement that `name` joined the room
    pub fn entered(name: &DisplayName) -> Self {
        Self::system(format!("{} has entered the room.", name))
    }

    /// Announcement that `name` left the room
    pub fn left(name: &DisplayName) -> Self {
        Self::system(format!("{} has left the room.", name))
    }

    fn system(body: String) -> Self {
        Self {
            body,
            commenter: None,
            is_system: true,
        }
    }
}

/// Consistent read of the room: members in join order and retained comments
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoomSnapshot {
    pub users: Vec<User>,
    pub comments: Vec<Comment>,
}
