//! Typed wrappers around session data.
//!
//! Each submodule owns one piece of session state with methods for inserting,
//! retrieving, and removing it, so handlers never touch raw session keys.

pub mod auth;
pub mod user;
