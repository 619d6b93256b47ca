//! Test utilities for building an AppState whose clients all point at the
//! mock provider server.

use warband::{
    model::app::AppState,
    provider::{Client, DiscordClient},
    service::auth::OauthClient,
};
use warband_test_utils::TestSetup;

/// Extension trait for TestSetup to create an AppState against the mock server
pub trait TestSetupExt {
    fn into_app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        let provider_url = self.provider_url();

        let profile_client = Client::builder()
            .api_url(&provider_url)
            .oauth_url(&provider_url)
            .build()
            .unwrap();

        let discord_client = DiscordClient::with_api_url(&provider_url).unwrap();

        let bnet_oauth = OauthClient::new(
            "bnet-client-id",
            "bnet-client-secret",
            &format!("{}/oauth/authorize", provider_url),
            &format!("{}/oauth/token", provider_url),
            "http://localhost:8080/api/auth/bnet/callback",
            vec!["openid".to_string(), "wow.profile".to_string()],
        )
        .unwrap();

        let discord_oauth = OauthClient::new(
            "discord-client-id",
            "discord-client-secret",
            &format!("{}/oauth/authorize", provider_url),
            &format!("{}/oauth/token", provider_url),
            "http://localhost:8080/api/auth/discord/callback",
            vec!["identify".to_string()],
        )
        .unwrap();

        AppState {
            db: self.db.clone(),
            profile_client,
            discord_client,
            bnet_oauth,
            discord_oauth,
        }
    }
}
