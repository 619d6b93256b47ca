use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    TransactionSession, TransactionTrait,
};

pub struct MainCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MainCharacterRepository<'a, C> {
    /// Creates a new instance of [`MainCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::warband_main_character::Model>, DbErr> {
        entity::prelude::WarbandMainCharacter::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::WarbandMainCharacter::delete_many()
            .filter(entity::warband_main_character::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> MainCharacterRepository<'a, C> {
    /// Replace the user's main-character selection.
    ///
    /// Delete and insert run in one transaction: an observer either sees the
    /// old selection or the new one, never zero or two rows.
    pub async fn set(
        &self,
        user_id: i32,
        character_name: &str,
        realm: &str,
    ) -> Result<entity::warband_main_character::Model, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::WarbandMainCharacter::delete_many()
            .filter(entity::warband_main_character::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let main = entity::warband_main_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_name: ActiveValue::Set(character_name.to_string()),
            realm: ActiveValue::Set(realm.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        let main = main.insert(&txn).await?;

        txn.commit().await?;

        Ok(main)
    }
}
