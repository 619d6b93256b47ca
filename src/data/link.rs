//! External identity link repositories.
//!
//! One row per user per provider, keyed on the user ID. Linking twice
//! refreshes the stored display fields instead of failing.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
};

pub struct BattlenetLinkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BattlenetLinkRepository<'a, C> {
    /// Creates a new instance of [`BattlenetLinkRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create or refresh the battle.net link for a user
    pub async fn link(
        &self,
        user_id: i32,
        battletag: &str,
    ) -> Result<entity::warband_battlenet_link::Model, DbErr> {
        match self.get_by_user_id(user_id).await? {
            Some(existing) => {
                let mut link_am = existing.into_active_model();
                link_am.battletag = ActiveValue::Set(battletag.to_string());
                link_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

                link_am.update(self.db).await
            }
            None => {
                let link = entity::warband_battlenet_link::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    battletag: ActiveValue::Set(battletag.to_string()),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                };

                link.insert(self.db).await
            }
        }
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::warband_battlenet_link::Model>, DbErr> {
        entity::prelude::WarbandBattlenetLink::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::WarbandBattlenetLink::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

pub struct DiscordLinkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiscordLinkRepository<'a, C> {
    /// Creates a new instance of [`DiscordLinkRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create or refresh the Discord link for a user
    pub async fn link(
        &self,
        user_id: i32,
        discord_id: &str,
        discord_name: &str,
    ) -> Result<entity::warband_discord_link::Model, DbErr> {
        match self.get_by_user_id(user_id).await? {
            Some(existing) => {
                let mut link_am = existing.into_active_model();
                link_am.discord_id = ActiveValue::Set(discord_id.to_string());
                link_am.discord_name = ActiveValue::Set(discord_name.to_string());
                link_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

                link_am.update(self.db).await
            }
            None => {
                let link = entity::warband_discord_link::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    discord_id: ActiveValue::Set(discord_id.to_string()),
                    discord_name: ActiveValue::Set(discord_name.to_string()),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                };

                link.insert(self.db).await
            }
        }
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::warband_discord_link::Model>, DbErr> {
        entity::prelude::WarbandDiscordLink::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::WarbandDiscordLink::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
