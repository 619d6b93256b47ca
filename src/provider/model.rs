//! Per-endpoint response schemas for the game-data provider.
//!
//! Every field that can be absent is optional or defaulted so a partial
//! payload decodes instead of failing; unknown fields are ignored by serde's
//! default behavior.

use serde::Deserialize;

/// A `{ "name": ... }` reference object, used for classes, guilds, and specs.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RealmRef {
    #[serde(default)]
    pub slug: String,
}

/// Account-character listing: accounts, each with its characters.
#[derive(Debug, Default, Deserialize)]
pub struct AccountProfile {
    #[serde(default)]
    pub wow_accounts: Vec<WowAccount>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WowAccount {
    #[serde(default)]
    pub characters: Vec<AccountCharacter>,
}

#[derive(Debug, Deserialize)]
pub struct AccountCharacter {
    pub name: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub playable_class: NamedRef,
    #[serde(default)]
    pub realm: RealmRef,
}

/// Character summary profile; only the guild reference is consumed.
#[derive(Debug, Default, Deserialize)]
pub struct CharacterSummary {
    #[serde(default)]
    pub guild: Option<NamedRef>,
}

impl CharacterSummary {
    /// Guild name, with the provider's occasional empty-name guild object
    /// treated the same as no guild at all.
    pub fn guild_name(self) -> Option<String> {
        self.guild.map(|guild| guild.name).filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub rating: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct BestRun {
    #[serde(default)]
    pub mythic_rating: Rating,
}

#[derive(Debug, Default, Deserialize)]
pub struct Period {
    #[serde(default)]
    pub best_runs: Vec<BestRun>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurrentPeriod {
    #[serde(default)]
    pub period: Period,
}

/// Mythic keystone profile carrying the season rating history.
#[derive(Debug, Default, Deserialize)]
pub struct KeystoneProfile {
    #[serde(default)]
    pub current_mythic_rating: Option<Rating>,
    #[serde(default)]
    pub current_period: CurrentPeriod,
}

impl KeystoneProfile {
    /// Selects the rating for the current period.
    ///
    /// Prefers the account-wide current rating when strictly positive,
    /// otherwise the maximum over the period's best runs. 0.0 means "no
    /// ranked activity this period".
    pub fn rating(&self) -> f64 {
        if let Some(current) = &self.current_mythic_rating {
            if current.rating > 0.0 {
                return current.rating;
            }
        }

        self.current_period
            .period
            .best_runs
            .iter()
            .map(|run| run.mythic_rating.rating)
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ActiveSpecialization {
    #[serde(default)]
    pub specialization: NamedRef,
}

/// Specialization profile; only the active specialization is consumed.
#[derive(Debug, Default, Deserialize)]
pub struct SpecializationProfile {
    #[serde(default)]
    pub active_specialization: Option<ActiveSpecialization>,
}

impl SpecializationProfile {
    pub fn active_spec_name(self) -> Option<String> {
        self.active_specialization
            .map(|active| active.specialization.name)
            .filter(|name| !name.is_empty())
    }
}

/// Battle.net userinfo response: the stable account identity.
#[derive(Debug, Deserialize)]
pub struct Userinfo {
    /// Stable account identifier, independent of any token's lifetime.
    pub sub: String,
    #[serde(default)]
    pub battletag: String,
}
