use tracing_subscriber::EnvFilter;

use warband::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let profile_client = startup::build_profile_client().unwrap();
    let discord_client = warband::provider::DiscordClient::new().unwrap();
    let (bnet_oauth, discord_oauth) = startup::build_oauth_clients(&config).unwrap();
    let db = startup::connect_to_database(&config).await.unwrap();
    let session = startup::session_layer();

    let state = AppState {
        db,
        profile_client,
        discord_client,
        bnet_oauth,
        discord_oauth,
    };

    let app = router::routes().with_state(state).layer(session);

    tracing::info!("Starting server on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}
