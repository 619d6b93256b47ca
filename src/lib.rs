//! Warband server library.
//!
//! Links a player's battle.net account to a persisted roster of World of
//! Warcraft characters. The aggregation pipeline fetches the account's
//! character listing from the game-data provider, enriches each character
//! with guild, keystone rating, and specialization via independent lookups,
//! classifies its role, and upserts the result. A storage layer keeps roster
//! rows, the main-character selection, and external account links coherent
//! under linking and unlinking.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod provider;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
