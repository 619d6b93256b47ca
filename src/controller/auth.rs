use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    controller::util::csrf::validate_csrf,
    error::{auth::AuthError, Error},
    model::{
        app::AppState,
        session::{auth::SessionAuthCsrf, user::SessionUserId},
    },
    service::{roster::RosterService, user::UserService},
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Login route to initiate login with battle.net
///
/// Creates an authorization URL and redirects the user there to begin the
/// login process. The generated CSRF state is stored in the session for
/// validation during the callback.
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects user to the battle.net login page
/// - 500 (Internal Server Error): The session store failed
#[utoipa::path(
    get,
    path = "/api/auth/bnet/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the battle.net login page"),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn bnet_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let redirect = state.bnet_oauth.authorize();

    SessionAuthCsrf::insert(&session, &redirect.state).await?;

    Ok(Redirect::temporary(&redirect.login_url))
}

/// Callback route the user is redirected to after logging in at battle.net
///
/// Exchanges the authorization code for an access token, resolves the stable
/// account identity from the userinfo endpoint, links (or re-links) the
/// account, and refreshes the character roster with the in-flight token. The
/// token itself is never stored.
///
/// # Responses
/// - 307 (Temporary Redirect): Successful login, redirect to the user route
/// - 400 (Bad Request): CSRF state mismatch with the state stored in session
/// - 500 (Internal Server Error): Token exchange, identity lookup, or a
///   database-related error
#[utoipa::path(
    get,
    path = "/api/auth/bnet/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state returned by the provider"),
        ("code" = String, Query, description = "Authorization code to exchange"),
    ),
    responses(
        (status = 307, description = "Logged in, redirect to the user route"),
        (status = 400, description = "CSRF validation failed", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn bnet_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &params.0.state).await?;

    let token = state.bnet_oauth.exchange(&params.0.code).await?;

    let userinfo = state.profile_client.get_userinfo(&token).await?;

    let user = UserService::new(&state.db)
        .link_battlenet(&userinfo.sub, &userinfo.battletag)
        .await?;

    // The roster is refreshed while the token is in flight; a provider
    // outage here costs the roster data, not the login
    if let Err(err) = RosterService::new(&state.db, &state.profile_client)
        .refresh(user.id, &token)
        .await
    {
        tracing::warn!(
            "Roster refresh at link time failed for user {}: {}",
            user.id,
            err
        );
    }

    SessionUserId::insert(&session, user.id).await?;

    Ok(Redirect::temporary("/api/user"))
}

/// Login route to initiate Discord linking for the logged-in user
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects user to the Discord consent page
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): The session store failed
#[utoipa::path(
    get,
    path = "/api/auth/discord/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the Discord consent page"),
        (status = 401, description = "Not logged in", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn discord_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    if SessionUserId::get(&session).await?.is_none() {
        return Err(AuthError::UserNotInSession.into());
    }

    let redirect = state.discord_oauth.authorize();

    SessionAuthCsrf::insert(&session, &redirect.state).await?;

    Ok(Redirect::temporary(&redirect.login_url))
}

/// Callback route the user is redirected to after consenting at Discord
///
/// # Responses
/// - 307 (Temporary Redirect): Identity linked, redirect to the user route
/// - 400 (Bad Request): CSRF state mismatch with the state stored in session
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): Token exchange, identity lookup, or a
///   database-related error
#[utoipa::path(
    get,
    path = "/api/auth/discord/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state returned by Discord"),
        ("code" = String, Query, description = "Authorization code to exchange"),
    ),
    responses(
        (status = 307, description = "Linked, redirect to the user route"),
        (status = 400, description = "CSRF validation failed", body = crate::model::api::ErrorDto),
        (status = 401, description = "Not logged in", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn discord_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    validate_csrf(&session, &params.0.state).await?;

    let token = state.discord_oauth.exchange(&params.0.code).await?;

    let discord_user = state.discord_client.get_current_user(&token).await?;

    UserService::new(&state.db)
        .link_discord(user_id, &discord_user.id, &discord_user.username)
        .await?;

    Ok(Redirect::temporary("/api/user"))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to login route
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the login route"),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear sessions which actually carry a user
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/api/auth/bnet/login"))
}
