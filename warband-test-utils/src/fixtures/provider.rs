//! Mock provider endpoint creation utilities.
//!
//! Each method registers a mock HTTP endpoint on the test server simulating one
//! of the game-data provider's profile endpoints. Query strings are ignored so
//! the namespace/locale parameters the client appends do not need to be matched.

use std::sync::Arc;

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::fixtures::ProviderFixtures;

impl<'a> ProviderFixtures<'a> {
    /// Build one character entry for the account listing body.
    pub fn account_character(name: &str, realm: &str, level: i32, class: &str) -> serde_json::Value {
        json!({
            "name": name,
            "level": level,
            "playable_class": { "name": class },
            "realm": { "slug": realm }
        })
    }

    /// Mock the account-character listing endpoint.
    ///
    /// `characters` are all placed under a single account entry; build them with
    /// [`ProviderFixtures::account_character`].
    pub fn with_account_profile(
        &mut self,
        characters: Vec<serde_json::Value>,
        expected_requests: usize,
    ) -> Arc<Mock> {
        let body = json!({ "wow_accounts": [ { "characters": characters } ] });

        let mock = self
            .setup
            .server
            .mock("GET", "/profile/user/wow")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();
        let mock = Arc::new(mock);

        self.setup.mocks.push(mock.clone());
        mock
    }

    /// Mock the account-character listing endpoint with a non-success status.
    pub fn with_account_profile_error(&mut self, status: usize) -> Arc<Mock> {
        let mock = self
            .setup
            .server
            .mock("GET", "/profile/user/wow")
            .match_query(Matcher::Any)
            .with_status(status)
            .create();
        let mock = Arc::new(mock);

        self.setup.mocks.push(mock.clone());
        mock
    }

    /// Mock the character summary endpoint carrying guild membership.
    ///
    /// `guild: None` renders a body without a guild field, matching what the
    /// provider returns for guildless characters.
    pub fn with_character_summary(
        &mut self,
        realm: &str,
        name: &str,
        guild: Option<&str>,
        expected_requests: usize,
    ) -> Arc<Mock> {
        let body = match guild {
            Some(guild) => json!({ "guild": { "name": guild } }),
            None => json!({}),
        };

        let path = format!("/profile/wow/character/{}/{}", realm, name);
        let mock = self
            .setup
            .server
            .mock("GET", path.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();
        let mock = Arc::new(mock);

        self.setup.mocks.push(mock.clone());
        mock
    }

    /// Mock the character summary endpoint with an arbitrary status and no body.
    pub fn with_character_summary_status(
        &mut self,
        realm: &str,
        name: &str,
        status: usize,
    ) -> Arc<Mock> {
        let path = format!("/profile/wow/character/{}/{}", realm, name);
        let mock = self
            .setup
            .server
            .mock("GET", path.as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .create();
        let mock = Arc::new(mock);

        self.setup.mocks.push(mock.clone());
        mock
    }

    /// Mock the keystone profile endpoint.
    pub fn with_keystone_profile(
        &mut self,
        realm: &str,
        name: &str,
        current_rating: f64,
        best_run_ratings: &[f64],
        expected_requests: usize,
    ) -> Arc<Mock> {
        let best_runs: Vec<serde_json::Value> = best_run_ratings
            .iter()
            .map(|rating| json!({ "mythic_rating": { "rating": rating } }))
            .collect();

        let body = json!({
            "current_mythic_rating": { "rating": current_rating },
            "current_period": { "period": { "best_runs": best_runs } }
        });

        let path = format!(
            "/profile/wow/character/{}/{}/mythic-keystone-profile",
            realm, name
        );
        let mock = self
            .setup
            .server
            .mock("GET", path.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();
        let mock = Arc::new(mock);

        self.setup.mocks.push(mock.clone());
        mock
    }

    /// Mock the keystone profile endpoint with an arbitrary status and no body.
    pub fn with_keystone_profile_status(&mut self, realm: &str, name: &str, status: usize) -> Arc<Mock> {
        let path = format!(
            "/profile/wow/character/{}/{}/mythic-keystone-profile",
            realm, name
        );
        let mock = self
            .setup
            .server
            .mock("GET", path.as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .create();
        let mock = Arc::new(mock);

        self.setup.mocks.push(mock.clone());
        mock
    }

    /// Mock the active specialization endpoint.
    pub fn with_specializations(
        &mut self,
        realm: &str,
        name: &str,
        spec: &str,
        expected_requests: usize,
    ) -> Arc<Mock> {
        let body = json!({
            "active_specialization": { "specialization": { "name": spec } }
        });

        let path = format!("/profile/wow/character/{}/{}/specializations", realm, name);
        let mock = self
            .setup
            .server
            .mock("GET", path.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();
        let mock = Arc::new(mock);

        self.setup.mocks.push(mock.clone());
        mock
    }

    /// Mock the active specialization endpoint with an arbitrary status and no body.
    pub fn with_specializations_status(&mut self, realm: &str, name: &str, status: usize) -> Arc<Mock> {
        let path = format!("/profile/wow/character/{}/{}/specializations", realm, name);
        let mock = self
            .setup
            .server
            .mock("GET", path.as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .create();
        let mock = Arc::new(mock);

        self.setup.mocks.push(mock.clone());
        mock
    }

    /// Mock the OAuth userinfo endpoint carrying the stable account identity.
    pub fn with_userinfo(
        &mut self,
        battlenet_id: &str,
        battletag: &str,
        expected_requests: usize,
    ) -> Arc<Mock> {
        let body = json!({ "sub": battlenet_id, "battletag": battletag });

        let mock = self
            .setup
            .server
            .mock("GET", "/oauth/userinfo")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();
        let mock = Arc::new(mock);

        self.setup.mocks.push(mock.clone());
        mock
    }

    /// Register all three per-character field endpoints with success bodies.
    ///
    /// Convenience for aggregation tests that only care about one character's
    /// happy path: guild, keystone rating, and specialization in one call.
    pub fn with_character_fields(
        &mut self,
        realm: &str,
        name: &str,
        guild: Option<&str>,
        current_rating: f64,
        spec: &str,
    ) -> Vec<Arc<Mock>> {
        vec![
            self.with_character_summary(realm, name, guild, 1),
            self.with_keystone_profile(realm, name, current_rating, &[], 1),
            self.with_specializations(realm, name, spec, 1),
        ]
    }
}
