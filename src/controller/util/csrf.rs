use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Consume the session CSRF token and compare it against the state echoed
/// back by the provider.
///
/// The token is removed before comparison, so a failed callback never leaves
/// a replayable token behind in the session.
pub async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = SessionAuthCsrf::remove(session).await?;

    if stored_state != csrf_state {
        return Err(Error::AuthError(AuthError::CsrfValidationFailed));
    }

    Ok(())
}
