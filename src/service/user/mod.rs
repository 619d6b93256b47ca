//! User account service layer.
//!
//! Owns account linking and its teardown: resolving a battle.net identity to
//! a user row, attaching and detaching external identity links, and the
//! transactional cleanup that unlinking battle.net implies.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        character::CharacterRepository,
        link::{BattlenetLinkRepository, DiscordLinkRepository},
        main_character::MainCharacterRepository,
        user::UserRepository,
    },
    error::Error,
    model::api::{MainCharacterDto, UserDto},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve a battle.net identity to a user, creating one on first link.
    ///
    /// Keyed on the stable account ID, so the same account always lands on
    /// the same user no matter how often tokens rotate. The battletag and
    /// the link row are refreshed on every call.
    pub async fn link_battlenet(
        &self,
        battlenet_id: &str,
        battletag: &str,
    ) -> Result<entity::warband_user::Model, Error> {
        let user_repo = UserRepository::new(self.db);
        let link_repo = BattlenetLinkRepository::new(self.db);

        let user = match user_repo.get_by_battlenet_id(battlenet_id).await? {
            Some(user) => user_repo
                .update_battletag(user.id, battletag)
                .await?
                .unwrap_or(user),
            None => {
                let user = user_repo.create(battlenet_id, battletag).await?;

                tracing::info!("Created user {} for new battle.net account", user.id);

                user
            }
        };

        link_repo.link(user.id, battletag).await?;

        Ok(user)
    }

    /// Detach the battle.net account and everything derived from it.
    ///
    /// Roster rows, the main-character selection, and the link row go in one
    /// transaction; a failure at any step leaves all three tables as they
    /// were. The user row itself survives so a Discord link stays valid.
    pub async fn unlink_battlenet(&self, user_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        CharacterRepository::new(&txn)
            .delete_by_user_id(user_id)
            .await?;
        MainCharacterRepository::new(&txn)
            .delete_by_user_id(user_id)
            .await?;
        BattlenetLinkRepository::new(&txn)
            .delete_by_user_id(user_id)
            .await?;

        txn.commit().await?;

        tracing::info!("Unlinked battle.net account for user {}", user_id);

        Ok(())
    }

    /// Attach or refresh the Discord identity for a user.
    pub async fn link_discord(
        &self,
        user_id: i32,
        discord_id: &str,
        discord_name: &str,
    ) -> Result<entity::warband_discord_link::Model, Error> {
        let link = DiscordLinkRepository::new(self.db)
            .link(user_id, discord_id, discord_name)
            .await?;

        Ok(link)
    }

    /// Detach the Discord identity; a no-op when no link exists.
    pub async fn unlink_discord(&self, user_id: i32) -> Result<(), Error> {
        DiscordLinkRepository::new(self.db)
            .delete_by_user_id(user_id)
            .await?;

        Ok(())
    }

    /// Assemble the account view: identity, links, and main selection.
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = match UserRepository::new(self.db).get_by_id(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let discord_link = DiscordLinkRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        let main_character = MainCharacterRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(Some(UserDto {
            id: user.id,
            battletag: user.battletag,
            discord_name: discord_link.map(|link| link.discord_name),
            main_character: main_character.map(MainCharacterDto::from),
        }))
    }

    /// Whether the user currently has a battle.net link.
    pub async fn has_battlenet_link(&self, user_id: i32) -> Result<bool, Error> {
        let link = BattlenetLinkRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(link.is_some())
    }
}
