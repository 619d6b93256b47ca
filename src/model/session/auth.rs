//! CSRF state storage for OAuth flows.
//!
//! The CSRF state token is generated during login initiation, stored in the
//! session, and removed during the OAuth callback so it can only be used once.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{auth::AuthError, Error};

/// Session key for storing the CSRF state token.
pub const SESSION_AUTH_CSRF_KEY: &str = "warband:auth:csrf";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Inserts the CSRF state token into the session.
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Retrieves the CSRF state token without removing it.
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Removes and returns the CSRF state token, ensuring single use.
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session.remove(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
