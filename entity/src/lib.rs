pub mod prelude;

pub mod warband_battlenet_link;
pub mod warband_character;
pub mod warband_discord_link;
pub mod warband_main_character;
pub mod warband_user;
