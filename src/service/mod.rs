//! Business logic services.
//!
//! Services sit between controllers and repositories: [`auth`] wraps the
//! OAuth2 flows, [`roster`] owns the refresh pipeline from provider data to
//! stored characters, and [`user`] owns account linking and its teardown.

pub mod auth;
pub mod roster;
pub mod user;
