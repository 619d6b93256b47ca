//! Game-data provider clients.
//!
//! [`client::Client`] talks to the battle.net profile API; [`discord`] holds
//! the thin Discord identity client used during account linking. Both are
//! constructed once at startup from [`crate::config::Config`] and shared via
//! application state.

pub mod client;
pub mod discord;
pub mod model;

pub use client::Client;
pub use discord::DiscordClient;
