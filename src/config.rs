pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub bnet_client_id: String,
    pub bnet_client_secret: String,
    pub bnet_callback_url: String,
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_callback_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            bnet_client_id: std::env::var("BNET_CLIENT_ID")?,
            bnet_client_secret: std::env::var("BNET_CLIENT_SECRET")?,
            bnet_callback_url: std::env::var("BNET_CALLBACK_URL")?,
            discord_client_id: std::env::var("DISCORD_CLIENT_ID")?,
            discord_client_secret: std::env::var("DISCORD_CLIENT_SECRET")?,
            discord_callback_url: std::env::var("DISCORD_CALLBACK_URL")?,
        })
    }
}
