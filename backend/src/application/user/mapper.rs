//! DTO conversion for users.

use crate::application::mapper::Mapper;
use crate::domain::{Character, User};

use super::dto::{CharacterDto, UserRequestDto, UserResponseDto};

/// Converts between [`User`] and its request/response shapes.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserEntityMapper;

impl UserEntityMapper {
    fn character_dto(character: &Character) -> CharacterDto {
        CharacterDto {
            id: character.id().value(),
            level: character.level(),
            experience: character.experience(),
            battles: character.battles(),
            wins: character.wins(),
            losses: character.losses(),
            medals: character.medals(),
        }
    }
}

impl Mapper<User> for UserEntityMapper {
    type Request = UserRequestDto;
    type Response = UserResponseDto;

    fn to_entity(&self, request: UserRequestDto) -> User {
        let mut user = User::new(request.email, request.username);
        user.set_password(request.password);
        user
    }

    fn to_dto(&self, entity: &User) -> UserResponseDto {
        UserResponseDto {
            id: entity.id().value(),
            email: entity.email().to_owned(),
            username: entity.username().to_owned(),
            character: Self::character_dto(entity.character()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityId;

    #[test]
    fn round_trip_preserves_every_exposed_field() {
        let request = UserRequestDto {
            email: "alice@example.com".to_owned(),
            username: "alice".to_owned(),
            password: "hunter2".to_owned(),
        };

        let mapper = UserEntityMapper;
        let entity = mapper.to_entity(request.clone());
        let response = mapper.to_dto(&entity);

        assert_eq!(response.email, request.email);
        assert_eq!(response.username, request.username);
        assert_eq!(response.id, 0, "unpersisted entity keeps the zero id");

        let rebuilt = mapper.to_entity(UserRequestDto {
            email: response.email.clone(),
            username: response.username.clone(),
            password: request.password,
        });
        assert_eq!(mapper.to_dto(&rebuilt), response);
    }

    #[test]
    fn response_reflects_the_persisted_identifier() {
        let mapper = UserEntityMapper;
        let entity = mapper
            .to_entity(UserRequestDto {
                email: "alice@example.com".to_owned(),
                username: "alice".to_owned(),
                password: "hunter2".to_owned(),
            })
            .with_id(EntityId::new(12));

        assert_eq!(mapper.to_dto(&entity).id, 12);
    }

    #[test]
    fn response_serialisation_never_exposes_password_material() {
        let mapper = UserEntityMapper;
        let entity = mapper.to_entity(UserRequestDto {
            email: "alice@example.com".to_owned(),
            username: "alice".to_owned(),
            password: "hunter2".to_owned(),
        });

        let json = serde_json::to_string(&mapper.to_dto(&entity)).expect("serialize response");
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("password"));
    }
}
