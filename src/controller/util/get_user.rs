use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{api::UserDto, app::AppState},
    service::user::UserService,
};

/// Resolve the logged-in user from the session and database.
///
/// Clears the session when it carries a user ID with no matching row, so a
/// stale session heals itself on the next login.
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = crate::model::session::user::SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but no database row",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}
