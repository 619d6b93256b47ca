//! Startup wiring: database, sessions, and provider clients.

use sea_orm::DatabaseConnection;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::{
    config::Config,
    error::Error,
    provider::Client,
    service::auth::OauthClient,
};

/// Build and configure the game-data provider client
pub fn build_profile_client() -> Result<Client, Error> {
    let client = Client::builder().build()?;

    Ok(client)
}

/// Build the OAuth clients for battle.net login and Discord linking
pub fn build_oauth_clients(config: &Config) -> Result<(OauthClient, OauthClient), Error> {
    let bnet = OauthClient::battlenet(
        &config.bnet_client_id,
        &config.bnet_client_secret,
        &config.bnet_callback_url,
    )?;

    let discord = OauthClient::discord(
        &config.discord_client_id,
        &config.discord_client_secret,
        &config.discord_callback_url,
    )?;

    Ok((bnet, discord))
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure in-memory session management
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    let session_store = MemoryStore::default();

    // Secure cookies outside of debug builds
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
