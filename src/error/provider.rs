use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::InternalServerError, model::api::ErrorDto};

/// Errors from the game-data provider client.
///
/// Carries which endpoint failed and how, so hard failures surface with
/// enough context to log and display. Not-found is not represented here;
/// endpoints where 404 is a valid terminal state return `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Access token is empty")]
    EmptyToken,
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl IntoResponse for ProviderError {
    fn into_response(self) -> Response {
        match self {
            Self::EmptyToken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}
