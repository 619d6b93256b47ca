//! Database row factories.
//!
//! Insert helpers for user, roster, main-character, and link rows with standard
//! test values. Factories return the inserted model so tests can reference
//! generated keys.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    constant::{TEST_BATTLENET_ID, TEST_BATTLETAG},
    error::TestError,
    fixtures::DataFixtures,
};

impl<'a> DataFixtures<'a> {
    /// Insert a user with the standard test battle.net identity.
    pub async fn insert_user(&self) -> Result<entity::warband_user::Model, TestError> {
        self.insert_user_with_battlenet_id(TEST_BATTLENET_ID).await
    }

    /// Insert a user with an explicit battle.net account identifier.
    pub async fn insert_user_with_battlenet_id(
        &self,
        battlenet_id: &str,
    ) -> Result<entity::warband_user::Model, TestError> {
        let user = entity::warband_user::ActiveModel {
            battlenet_id: ActiveValue::Set(battlenet_id.to_string()),
            battletag: ActiveValue::Set(TEST_BATTLETAG.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.setup.db).await?)
    }

    /// Insert a roster character with standard test values.
    pub async fn insert_character(
        &self,
        user_id: i32,
        name: &str,
        realm: &str,
    ) -> Result<entity::warband_character::Model, TestError> {
        let character = entity::warband_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            realm: ActiveValue::Set(realm.to_string()),
            level: ActiveValue::Set(80),
            class: ActiveValue::Set("Warrior".to_string()),
            guild: ActiveValue::Set(None),
            keystone_rating: ActiveValue::Set(0.0),
            spec: ActiveValue::Set("Arms".to_string()),
            role: ActiveValue::Set("Melee".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(character.insert(&self.setup.db).await?)
    }

    /// Insert a main-character selection row.
    pub async fn insert_main_character(
        &self,
        user_id: i32,
        character_name: &str,
        realm: &str,
    ) -> Result<entity::warband_main_character::Model, TestError> {
        let main = entity::warband_main_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_name: ActiveValue::Set(character_name.to_string()),
            realm: ActiveValue::Set(realm.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(main.insert(&self.setup.db).await?)
    }

    /// Insert a battle.net link row.
    pub async fn insert_battlenet_link(
        &self,
        user_id: i32,
    ) -> Result<entity::warband_battlenet_link::Model, TestError> {
        let link = entity::warband_battlenet_link::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            battletag: ActiveValue::Set(TEST_BATTLETAG.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(link.insert(&self.setup.db).await?)
    }

    /// Insert a Discord link row.
    pub async fn insert_discord_link(
        &self,
        user_id: i32,
        discord_id: &str,
        discord_name: &str,
    ) -> Result<entity::warband_discord_link::Model, TestError> {
        let link = entity::warband_discord_link::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            discord_id: ActiveValue::Set(discord_id.to_string()),
            discord_name: ActiveValue::Set(discord_name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(link.insert(&self.setup.db).await?)
    }
}
