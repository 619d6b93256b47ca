use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A roster character as stored after the last refresh.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub name: String,
    pub realm: String,
    pub level: i32,
    pub class: String,
    /// None when the character is unguilded or the guild lookup soft-failed.
    pub guild: Option<String>,
    pub keystone_rating: f64,
    pub spec: String,
    pub role: String,
    pub updated_at: NaiveDateTime,
}

impl From<entity::warband_character::Model> for CharacterDto {
    fn from(model: entity::warband_character::Model) -> Self {
        Self {
            name: model.name,
            realm: model.realm,
            level: model.level,
            class: model.class,
            guild: model.guild,
            keystone_rating: model.keystone_rating,
            spec: model.spec,
            role: model.role,
            updated_at: model.updated_at,
        }
    }
}

/// The user's designated main character.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MainCharacterDto {
    pub character_name: String,
    pub realm: String,
}

impl From<entity::warband_main_character::Model> for MainCharacterDto {
    fn from(model: entity::warband_main_character::Model) -> Self {
        Self {
            character_name: model.character_name,
            realm: model.realm,
        }
    }
}

/// Request body for designating a main character.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct SetMainDto {
    pub character_name: String,
    pub realm: String,
}

/// The current user's account status and linked identities.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub battletag: String,
    pub discord_name: Option<String>,
    pub main_character: Option<MainCharacterDto>,
}
