//! Per-character field resolution.
//!
//! The three enrichment lookups run concurrently and fail independently: a
//! guild lookup that times out costs only the guild field, never the rating
//! or the spec, and never the character itself.

use crate::provider::Client;

pub const UNKNOWN_SPEC: &str = "Unknown";

/// Enrichment fields for one character, defaults already applied.
#[derive(Debug)]
pub struct ResolvedFields {
    pub guild: Option<String>,
    pub keystone_rating: f64,
    pub spec: String,
}

/// Resolve guild, keystone rating, and active spec for one character.
///
/// `realm` and `name` must already be normalized lookup keys.
pub async fn resolve_character(
    client: &Client,
    realm: &str,
    name: &str,
    token: &str,
) -> ResolvedFields {
    let (guild, keystone_rating, spec) = tokio::join!(
        resolve_guild(client, realm, name, token),
        resolve_rating(client, realm, name, token),
        resolve_spec(client, realm, name, token),
    );

    ResolvedFields {
        guild,
        keystone_rating,
        spec,
    }
}

async fn resolve_guild(client: &Client, realm: &str, name: &str, token: &str) -> Option<String> {
    match client.get_character_summary(realm, name, token).await {
        Ok(Some(summary)) => summary.guild_name(),
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(
                "Guild lookup failed for {}-{}, leaving guild unset: {}",
                name,
                realm,
                err
            );
            None
        }
    }
}

async fn resolve_rating(client: &Client, realm: &str, name: &str, token: &str) -> f64 {
    match client.get_keystone_profile(realm, name, token).await {
        Ok(Some(profile)) => profile.rating(),
        Ok(None) => 0.0,
        Err(err) => {
            tracing::warn!(
                "Keystone lookup failed for {}-{}, defaulting rating to 0: {}",
                name,
                realm,
                err
            );
            0.0
        }
    }
}

async fn resolve_spec(client: &Client, realm: &str, name: &str, token: &str) -> String {
    let spec = match client.get_specializations(realm, name, token).await {
        Ok(Some(profile)) => profile.active_spec_name(),
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(
                "Specialization lookup failed for {}-{}, defaulting to {}: {}",
                name,
                realm,
                UNKNOWN_SPEC,
                err
            );
            None
        }
    };

    spec.unwrap_or_else(|| UNKNOWN_SPEC.to_string())
}
