use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::InternalServerError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("CSRF state validation failed")]
    CsrfValidationFailed,
    #[error("No CSRF state present in session")]
    CsrfMissingValue,
    #[error("No user in session")]
    UserNotInSession,
    #[error("User {0} in session but not in database")]
    UserNotInDatabase(i32),
    #[error("Invalid OAuth endpoint URL: {0}")]
    InvalidEndpoint(String),
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::CsrfValidationFailed | Self::CsrfMissingValue => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}
