//! Conversion logic between DTOs and domain entities.

use crate::domain::{
    entity::{Comment, Gender, Profile, RoomSnapshot, User},
    error::ValueObjectError,
    value_object::{ColorIndex, DisplayName, UserId},
};
use crate::infrastructure::dto::{http as dto, websocket as ws};

// ========================================
// DTO → Domain Entity
// ========================================

impl From<dto::GenderDto> for Gender {
    fn from(dto: dto::GenderDto) -> Self {
        match dto {
            dto::GenderDto::Unspecified => Self::Unspecified,
            dto::GenderDto::Man => Self::Man,
            dto::GenderDto::Woman => Self::Woman,
        }
    }
}

impl TryFrom<dto::ProfileDto> for Profile {
    type Error = ValueObjectError;

    fn try_from(dto: dto::ProfileDto) -> Result<Self, Self::Error> {
        Ok(Self::new(
            DisplayName::new(dto.name)?,
            dto.age,
            dto.gender.into(),
        ))
    }
}

impl TryFrom<dto::UserDto> for User {
    type Error = ValueObjectError;

    fn try_from(dto: dto::UserDto) -> Result<Self, Self::Error> {
        Ok(Self::new(
            UserId::try_from(dto.id.as_str())?,
            dto.profile.try_into()?,
            ColorIndex::new(dto.color)?,
        ))
    }
}

impl TryFrom<dto::CommentDto> for Comment {
    type Error = ValueObjectError;

    fn try_from(dto: dto::CommentDto) -> Result<Self, Self::Error> {
        Ok(Self {
            body: dto.body,
            commenter: dto.commenter.map(User::try_from).transpose()?,
            is_system: dto.is_system_comment,
        })
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Gender> for dto::GenderDto {
    fn from(model: Gender) -> Self {
        match model {
            Gender::Unspecified => Self::Unspecified,
            Gender::Man => Self::Man,
            Gender::Woman => Self::Woman,
        }
    }
}

impl From<Profile> for dto::ProfileDto {
    fn from(model: Profile) -> Self {
        Self {
            name: model.name.into_string(),
            age: model.age,
            gender: model.gender.into(),
        }
    }
}

impl From<User> for dto::UserDto {
    fn from(model: User) -> Self {
        Self {
            id: model.id.to_string(),
            profile: model.profile.into(),
            color: model.color.value(),
        }
    }
}

impl From<Comment> for dto::CommentDto {
    fn from(model: Comment) -> Self {
        Self {
            body: model.body,
            commenter: model.commenter.map(Into::into),
            is_system_comment: model.is_system,
        }
    }
}

impl From<RoomSnapshot> for dto::RoomStateDto {
    fn from(model: RoomSnapshot) -> Self {
        Self {
            joined_users: model.users.into_iter().map(Into::into).collect(),
            latest_comments: model.comments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<RoomSnapshot> for ws::RoomStateMessage {
    fn from(model: RoomSnapshot) -> Self {
        let state = dto::RoomStateDto::from(model);
        Self {
            r#type: ws::MessageType::RoomState,
            joined_users: state.joined_users,
            latest_comments: state.latest_comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice_dto() -> dto::UserDto {
        dto::UserDto {
            id: UserId::generate().to_string(),
            profile: dto::ProfileDto {
                name: "Alice".to_string(),
                age: 10,
                gender: dto::GenderDto::Man,
            },
            color: 3,
        }
    }

    #[test]
    fn test_dto_user_to_domain() {
        // テスト項目: DTO の UserDto がドメインエンティティに変換される
        // given (前提条件):
        let dto_user = alice_dto();

        // when (操作):
        let user = User::try_from(dto_user.clone()).unwrap();

        // then (期待する結果):
        assert_eq!(user.id.to_string(), dto_user.id);
        assert_eq!(user.name().as_str(), "Alice");
        assert_eq!(user.profile.gender, Gender::Man);
        assert_eq!(user.color.value(), 3);
    }

    #[test]
    fn test_dto_user_with_bad_color_is_rejected() {
        // テスト項目: 範囲外の色を持つ UserDto は変換エラーになる
        // given (前提条件):
        let mut dto_user = alice_dto();
        dto_user.color = 9;

        // when (操作):
        let result = User::try_from(dto_user);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::ColorOutOfRange(9)));
    }

    #[test]
    fn test_dto_profile_with_blank_name_is_rejected() {
        // テスト項目: 空の名前を持つ ProfileDto は変換エラーになる
        // given (前提条件):
        let dto_profile = dto::ProfileDto {
            name: " ".to_string(),
            age: 10,
            gender: dto::GenderDto::Unspecified,
        };

        // when (操作):
        let result = Profile::try_from(dto_profile);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyDisplayName));
    }

    #[test]
    fn test_snapshot_to_websocket_message() {
        // テスト項目: RoomSnapshot が room_state フレームに変換され、順序が保たれる
        // given (前提条件):
        let alice = User::try_from(alice_dto()).unwrap();
        let snapshot = RoomSnapshot {
            users: vec![alice.clone()],
            comments: vec![
                Comment::entered(alice.name()),
                Comment::from_user(alice.clone(), "hi"),
            ],
        };

        // when (操作):
        let message = ws::RoomStateMessage::from(snapshot);

        // then (期待する結果):
        assert_eq!(message.r#type, ws::MessageType::RoomState);
        assert_eq!(message.joined_users.len(), 1);
        assert!(message.latest_comments[0].is_system_comment);
        assert!(message.latest_comments[0].commenter.is_none());
        assert_eq!(message.latest_comments[1].body, "hi");
        assert_eq!(
            message.latest_comments[1].commenter.as_ref().map(|u| u.id.clone()),
            Some(alice.id.to_string())
        );
    }
}
