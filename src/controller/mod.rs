//! HTTP controller endpoints.
//!
//! Axum handlers for the authentication flows and the user-facing roster
//! API. Controllers validate inputs, call into services, and map outcomes to
//! HTTP responses; utoipa annotations feed the OpenAPI document.

pub mod auth;
pub mod user;
pub mod util;
