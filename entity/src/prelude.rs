pub use super::warband_battlenet_link::Entity as WarbandBattlenetLink;
pub use super::warband_character::Entity as WarbandCharacter;
pub use super::warband_discord_link::Entity as WarbandDiscordLink;
pub use super::warband_main_character::Entity as WarbandMainCharacter;
pub use super::warband_user::Entity as WarbandUser;
