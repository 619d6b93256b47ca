//! Thin Discord identity client.
//!
//! Only fetches the current user after the OAuth2 exchange so an account can
//! be linked; no other Discord surface is touched.

use serde::Deserialize;

use crate::error::provider::ProviderError;

static CURRENT_USER_ENDPOINT: &str = "discord current user";

const DEFAULT_API_URL: &str = "https://discord.com/api/v10";

#[derive(Debug, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
}

#[derive(Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    api_url: String,
}

impl DiscordClient {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_api_url(DEFAULT_API_URL)
    }

    pub fn with_api_url(api_url: &str) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(ProviderError::Build)?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_current_user(&self, token: &str) -> Result<DiscordUser, ProviderError> {
        if token.trim().is_empty() {
            return Err(ProviderError::EmptyToken);
        }

        let url = format!("{}/users/@me", self.api_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|source| ProviderError::Request {
                endpoint: CURRENT_USER_ENDPOINT,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint: CURRENT_USER_ENDPOINT,
                status: status.as_u16(),
            });
        }

        response
            .json::<DiscordUser>()
            .await
            .map_err(|source| ProviderError::Decode {
                endpoint: CURRENT_USER_ENDPOINT,
                source,
            })
    }
}
