//! Placeholder values shared across tests. None of these are real credentials.

/// Bearer token accepted by every mock provider endpoint.
pub static TEST_ACCESS_TOKEN: &str = "test_access_token";

/// Stable battle.net account identifier used for test users.
pub static TEST_BATTLENET_ID: &str = "bnet-account-1";

/// Battletag used for test users.
pub static TEST_BATTLETAG: &str = "Tester#1234";
