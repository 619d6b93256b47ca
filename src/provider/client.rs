//! Battle.net profile API client.
//!
//! Four read-only endpoints, each authorized by bearer token. Endpoints where
//! not-found is a valid terminal state return `Ok(None)` for a 404; any other
//! non-success status is an error carrying the endpoint name and status so
//! callers can log it. Every request is bounded by the client timeout, so one
//! slow upstream call cannot stall a whole roster refresh.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::{
    error::provider::ProviderError,
    provider::model::{AccountProfile, CharacterSummary, KeystoneProfile, SpecializationProfile, Userinfo},
};

static ACCOUNT_PROFILE_ENDPOINT: &str = "account character listing";
static CHARACTER_SUMMARY_ENDPOINT: &str = "character summary";
static KEYSTONE_PROFILE_ENDPOINT: &str = "keystone profile";
static SPECIALIZATIONS_ENDPOINT: &str = "character specializations";
static USERINFO_ENDPOINT: &str = "userinfo";

const DEFAULT_API_URL: &str = "https://eu.api.blizzard.com";
const DEFAULT_OAUTH_URL: &str = "https://eu.battle.net";
const DEFAULT_NAMESPACE: &str = "profile-eu";
const DEFAULT_LOCALE: &str = "en_US";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_url: String,
    oauth_url: String,
    namespace: String,
    locale: String,
}

pub struct ClientBuilder {
    api_url: String,
    oauth_url: String,
    namespace: String,
    locale: String,
    timeout: Duration,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            oauth_url: DEFAULT_OAUTH_URL.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientBuilder {
    pub fn api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn oauth_url(mut self, oauth_url: &str) -> Self {
        self.oauth_url = oauth_url.trim_end_matches('/').to_string();
        self
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Client, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProviderError::Build)?;

        Ok(Client {
            http,
            api_url: self.api_url,
            oauth_url: self.oauth_url,
            namespace: self.namespace,
            locale: self.locale,
        })
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Fetches the account-character listing for the given access token.
    ///
    /// This is the account-level call everything else depends on: an empty
    /// token is rejected before any network traffic and every failure here is
    /// hard, including a 404.
    pub async fn get_account_characters(
        &self,
        token: &str,
    ) -> Result<AccountProfile, ProviderError> {
        if token.trim().is_empty() {
            return Err(ProviderError::EmptyToken);
        }

        let url = format!(
            "{}/profile/user/wow?namespace={}&locale={}",
            self.api_url, self.namespace, self.locale
        );

        match self.get_json(ACCOUNT_PROFILE_ENDPOINT, url, token).await? {
            Some(profile) => Ok(profile),
            None => Err(ProviderError::Status {
                endpoint: ACCOUNT_PROFILE_ENDPOINT,
                status: 404,
            }),
        }
    }

    /// Fetches the character summary carrying guild membership.
    ///
    /// `Ok(None)` when the character profile does not exist; that is a valid
    /// state, not an error.
    pub async fn get_character_summary(
        &self,
        realm: &str,
        name: &str,
        token: &str,
    ) -> Result<Option<CharacterSummary>, ProviderError> {
        let url = format!(
            "{}/profile/wow/character/{}/{}?namespace={}&locale={}",
            self.api_url, realm, name, self.namespace, self.locale
        );

        self.get_json(CHARACTER_SUMMARY_ENDPOINT, url, token).await
    }

    /// Fetches the mythic keystone profile. `Ok(None)` when the character has
    /// no keystone history at all.
    pub async fn get_keystone_profile(
        &self,
        realm: &str,
        name: &str,
        token: &str,
    ) -> Result<Option<KeystoneProfile>, ProviderError> {
        let url = format!(
            "{}/profile/wow/character/{}/{}/mythic-keystone-profile?namespace={}&locale={}",
            self.api_url, realm, name, self.namespace, self.locale
        );

        self.get_json(KEYSTONE_PROFILE_ENDPOINT, url, token).await
    }

    /// Fetches the specialization profile. `Ok(None)` when unavailable.
    pub async fn get_specializations(
        &self,
        realm: &str,
        name: &str,
        token: &str,
    ) -> Result<Option<SpecializationProfile>, ProviderError> {
        let url = format!(
            "{}/profile/wow/character/{}/{}/specializations?namespace={}&locale={}",
            self.api_url, realm, name, self.namespace, self.locale
        );

        self.get_json(SPECIALIZATIONS_ENDPOINT, url, token).await
    }

    /// Fetches the stable account identity for the given access token.
    ///
    /// Called once at link time; the returned `sub` claim is the persistent
    /// user key, so token rotation never orphans a roster.
    pub async fn get_userinfo(&self, token: &str) -> Result<Userinfo, ProviderError> {
        if token.trim().is_empty() {
            return Err(ProviderError::EmptyToken);
        }

        let url = format!("{}/oauth/userinfo", self.oauth_url);

        match self.get_json(USERINFO_ENDPOINT, url, token).await? {
            Some(userinfo) => Ok(userinfo),
            None => Err(ProviderError::Status {
                endpoint: USERINFO_ENDPOINT,
                status: 404,
            }),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: String,
        token: &str,
    ) -> Result<Option<T>, ProviderError> {
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|source| ProviderError::Request { endpoint, source })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let value = response
            .json::<T>()
            .await
            .map_err(|source| ProviderError::Decode { endpoint, source })?;

        Ok(Some(value))
    }
}
