//! Test fixtures: mock provider endpoints and database row factories.

pub mod data;
pub mod provider;

use crate::setup::TestSetup;

/// Mock HTTP endpoint helpers for the game-data provider.
pub struct ProviderFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}

/// Database row factories for user, roster, and link tables.
pub struct DataFixtures<'a> {
    pub(crate) setup: &'a TestSetup,
}
