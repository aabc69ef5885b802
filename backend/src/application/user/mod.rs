//! User operations: commands, handlers and wire shapes.

mod commands;
mod dto;
mod handlers;
mod mapper;

pub use commands::{AddUserCommand, DeleteUserCommand, GetAllUsersCommand, GetUserCommand};
pub use dto::{CharacterDto, UserRequestDto, UserResponseDto};
pub use handlers::{
    AddUserActionHandler, DeleteUserActionHandler, GetAllUsersActionHandler, GetUserActionHandler,
};
pub use mapper::UserEntityMapper;
