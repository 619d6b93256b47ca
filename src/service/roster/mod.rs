//! Roster refresh pipeline.
//!
//! Turns the account-character listing into stored roster rows. The listing
//! is the one hard dependency: if it fails nothing is written. Everything
//! downstream of it degrades per field.

pub mod resolve;
pub mod role;

use sea_orm::DatabaseConnection;

use crate::{
    data::character::{CharacterRecord, CharacterRepository},
    error::Error,
    provider::Client,
    service::roster::{resolve::resolve_character, role::role_for},
    util::normalize_key,
};

pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
    client: &'a Client,
}

impl<'a> RosterService<'a> {
    /// Creates a new instance of [`RosterService`]
    pub fn new(db: &'a DatabaseConnection, client: &'a Client) -> Self {
        Self { db, client }
    }

    /// Refresh the stored roster for a user from the provider.
    ///
    /// Fetches the account listing, enriches every character with guild,
    /// keystone rating, and active spec, classifies its role, and upserts
    /// the result. Returned rows preserve the listing's order. A listing
    /// failure aborts before anything is written; field lookup failures
    /// degrade to defaults and the run still succeeds.
    pub async fn refresh(
        &self,
        user_id: i32,
        token: &str,
    ) -> Result<Vec<entity::warband_character::Model>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let profile = self.client.get_account_characters(token).await?;

        let mut roster = Vec::new();

        for account in profile.wow_accounts {
            for character in account.characters {
                let name_key = normalize_key(&character.name);
                let realm_key = normalize_key(&character.realm.slug);

                let fields =
                    resolve_character(self.client, &realm_key, &name_key, token).await;

                let role = role_for(&character.playable_class.name, &fields.spec);

                let record = CharacterRecord {
                    name: character.name,
                    realm: character.realm.slug,
                    level: character.level,
                    class: character.playable_class.name,
                    guild: fields.guild,
                    keystone_rating: fields.keystone_rating,
                    spec: fields.spec,
                    role: role.as_str().to_string(),
                };

                let stored = character_repo.upsert(user_id, record).await?;

                roster.push(stored);
            }
        }

        tracing::info!(
            "Refreshed roster for user {}: {} characters",
            user_id,
            roster.len()
        );

        Ok(roster)
    }
}
