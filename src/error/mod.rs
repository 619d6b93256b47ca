//! Error types for the Warband server.
//!
//! Domain-specific error enums built on `thiserror`, aggregated into a single
//! [`Error`] type. All errors implement `IntoResponse` for axum; anything
//! without a specific mapping falls through to [`InternalServerError`], which
//! logs the detail and hides it from the client.

pub mod auth;
pub mod provider;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, provider::ProviderError},
    model::api::ErrorDto,
};

/// Main error type for the Warband server.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error (session, CSRF, OAuth exchange).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Game-data provider error (account listing, field lookups, userinfo).
    #[error(transparent)]
    ProviderError(#[from] ProviderError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::ProviderError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for debugging and returns a generic message to the
/// client so internal detail never leaks into API responses.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
