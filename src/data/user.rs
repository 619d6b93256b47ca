use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new user keyed on their stable battle.net account ID
    pub async fn create(
        &self,
        battlenet_id: &str,
        battletag: &str,
    ) -> Result<entity::warband_user::Model, DbErr> {
        let user = entity::warband_user::ActiveModel {
            battlenet_id: ActiveValue::Set(battlenet_id.to_string()),
            battletag: ActiveValue::Set(battletag.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::warband_user::Model>, DbErr> {
        entity::prelude::WarbandUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Look a user up by their stable battle.net account ID
    ///
    /// The account ID never changes across logins, unlike the access token,
    /// so repeated links always resolve to the same user.
    pub async fn get_by_battlenet_id(
        &self,
        battlenet_id: &str,
    ) -> Result<Option<entity::warband_user::Model>, DbErr> {
        entity::prelude::WarbandUser::find()
            .filter(entity::warband_user::Column::BattlenetId.eq(battlenet_id))
            .one(self.db)
            .await
    }

    /// Refresh the displayed battletag, which can change between logins
    pub async fn update_battletag(
        &self,
        user_id: i32,
        battletag: &str,
    ) -> Result<Option<entity::warband_user::Model>, DbErr> {
        let user = match entity::prelude::WarbandUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.battletag = ActiveValue::Set(battletag.to_string());
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
