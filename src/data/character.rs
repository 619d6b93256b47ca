use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Field values for one roster character, as resolved from the provider.
///
/// `guild` is `None` both for unguilded characters and when the guild lookup
/// soft-failed; the stored column never holds an empty string.
#[derive(Debug, Clone)]
pub struct CharacterRecord {
    pub name: String,
    pub realm: String,
    pub level: i32,
    pub class: String,
    pub guild: Option<String>,
    pub keystone_rating: f64,
    pub spec: String,
    pub role: String,
}

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert or update one roster row, keyed on (user, name, realm)
    ///
    /// A refresh never duplicates a character: if the row already exists its
    /// fields are overwritten in place and `created_at` is preserved.
    pub async fn upsert(
        &self,
        user_id: i32,
        record: CharacterRecord,
    ) -> Result<entity::warband_character::Model, DbErr> {
        let existing = self
            .get_by_user_name_realm(user_id, &record.name, &record.realm)
            .await?;

        match existing {
            Some(character) => {
                let mut character_am = character.into_active_model();
                character_am.level = ActiveValue::Set(record.level);
                character_am.class = ActiveValue::Set(record.class);
                character_am.guild = ActiveValue::Set(record.guild);
                character_am.keystone_rating = ActiveValue::Set(record.keystone_rating);
                character_am.spec = ActiveValue::Set(record.spec);
                character_am.role = ActiveValue::Set(record.role);
                character_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

                character_am.update(self.db).await
            }
            None => {
                let character = entity::warband_character::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    name: ActiveValue::Set(record.name),
                    realm: ActiveValue::Set(record.realm),
                    level: ActiveValue::Set(record.level),
                    class: ActiveValue::Set(record.class),
                    guild: ActiveValue::Set(record.guild),
                    keystone_rating: ActiveValue::Set(record.keystone_rating),
                    spec: ActiveValue::Set(record.spec),
                    role: ActiveValue::Set(record.role),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                };

                character.insert(self.db).await
            }
        }
    }

    pub async fn get_by_user_name_realm(
        &self,
        user_id: i32,
        name: &str,
        realm: &str,
    ) -> Result<Option<entity::warband_character::Model>, DbErr> {
        entity::prelude::WarbandCharacter::find()
            .filter(entity::warband_character::Column::UserId.eq(user_id))
            .filter(entity::warband_character::Column::Name.eq(name))
            .filter(entity::warband_character::Column::Realm.eq(realm))
            .one(self.db)
            .await
    }

    /// Gets the stored roster for a user in insertion order
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::warband_character::Model>, DbErr> {
        entity::prelude::WarbandCharacter::find()
            .filter(entity::warband_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::warband_character::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::WarbandCharacter::delete_many()
            .filter(entity::warband_character::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
