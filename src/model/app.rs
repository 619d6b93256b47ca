use sea_orm::DatabaseConnection;

use crate::{
    provider::{Client, DiscordClient},
    service::auth::OauthClient,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub profile_client: Client,
    pub discord_client: DiscordClient,
    pub bnet_oauth: OauthClient,
    pub discord_oauth: OauthClient,
}
