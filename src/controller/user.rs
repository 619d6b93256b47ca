use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::get_user::get_user_from_session,
    data::{character::CharacterRepository, main_character::MainCharacterRepository},
    error::{provider::ProviderError, Error},
    model::{
        api::{CharacterDto, ErrorDto, MainCharacterDto, SetMainDto, UserDto},
        app::AppState,
    },
    service::{roster::RosterService, user::UserService},
};

pub static USER_TAG: &str = "user";

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Get the logged-in user's account view
///
/// # Responses
/// - 200 (OK): The user's battletag, linked identities, and main selection
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user information", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Refresh the roster from the game-data provider
///
/// The caller supplies a provider access token as a bearer Authorization
/// header; the token is used for this refresh only and never stored. The
/// refreshed roster is returned in listing order.
///
/// # Responses
/// - 200 (OK): The refreshed roster
/// - 400 (Bad Request): Missing or empty bearer token
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): The provider listing failed or a database
///   error occurred; nothing was written
#[utoipa::path(
    post,
    path = "/api/user/refresh",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Refreshed roster in listing order", body = Vec<CharacterDto>),
        (status = 400, description = "Missing bearer token", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let token = bearer_token(&headers).ok_or(ProviderError::EmptyToken)?;

    let roster = RosterService::new(&state.db, &state.profile_client)
        .refresh(user.id, token)
        .await?;

    let dtos: Vec<CharacterDto> = roster.into_iter().map(CharacterDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the stored roster for the logged-in user
///
/// # Responses
/// - 200 (OK): The stored roster, empty when never refreshed
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/user/characters",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Stored roster in insertion order", body = Vec<CharacterDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_characters(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let characters = CharacterRepository::new(&state.db)
        .get_many_by_user_id(user.id)
        .await?;

    let dtos: Vec<CharacterDto> = characters.into_iter().map(CharacterDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Designate the user's main character
///
/// The selection must name a character currently in the stored roster.
///
/// # Responses
/// - 200 (OK): The new selection
/// - 401 (Unauthorized): No user in session
/// - 404 (Not Found): The named character is not in the stored roster
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    put,
    path = "/api/user/main",
    tag = USER_TAG,
    request_body = SetMainDto,
    responses(
        (status = 200, description = "Main character set", body = MainCharacterDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Character not in roster", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_main(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<SetMainDto>,
) -> Result<axum::response::Response, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let character = CharacterRepository::new(&state.db)
        .get_by_user_name_realm(user.id, &body.character_name, &body.realm)
        .await?;

    if character.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Character not found in roster".to_string(),
            }),
        )
            .into_response());
    }

    let main = MainCharacterRepository::new(&state.db)
        .set(user.id, &body.character_name, &body.realm)
        .await?;

    Ok((StatusCode::OK, Json(MainCharacterDto::from(main))).into_response())
}

/// Get the user's main-character selection
///
/// # Responses
/// - 200 (OK): The current selection
/// - 401 (Unauthorized): No user in session
/// - 404 (Not Found): No main character selected
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/user/main",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current main character", body = MainCharacterDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No main character selected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_main(
    State(state): State<AppState>,
    session: Session,
) -> Result<axum::response::Response, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let main = MainCharacterRepository::new(&state.db)
        .get_by_user_id(user.id)
        .await?;

    match main {
        Some(main) => Ok((StatusCode::OK, Json(MainCharacterDto::from(main))).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "No main character selected".to_string(),
            }),
        )
            .into_response()),
    }
}

/// Unlink the battle.net account
///
/// Removes the roster, the main-character selection, and the link itself in
/// one transaction.
///
/// # Responses
/// - 204 (No Content): Account unlinked
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): The transaction failed; nothing was removed
#[utoipa::path(
    delete,
    path = "/api/user/links/bnet",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Battle.net account unlinked"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlink_bnet(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    UserService::new(&state.db).unlink_battlenet(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Unlink the Discord identity
///
/// # Responses
/// - 204 (No Content): Identity unlinked, or no link existed
/// - 401 (Unauthorized): No user in session
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    delete,
    path = "/api/user/links/discord",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Discord identity unlinked"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlink_discord(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    UserService::new(&state.db).unlink_discord(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
