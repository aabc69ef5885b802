//! Wire shapes for user operations.

use serde::{Deserialize, Serialize};

/// Inbound payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequestDto {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Character stats exposed alongside a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub id: i64,
    pub level: u32,
    pub experience: u32,
    pub battles: u32,
    pub wins: u32,
    pub losses: u32,
    pub medals: u32,
}

/// Outbound user payload; never carries password material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub character: CharacterDto,
}
