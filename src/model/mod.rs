//! Application data models.
//!
//! [`api`] holds the DTOs exposed on the HTTP surface, [`app`] the shared
//! application state, and [`session`] the typed wrappers around session
//! storage.

pub mod api;
pub mod app;
pub mod session;
