use axum::{extract::State, http::StatusCode, response::IntoResponse};
use warband::{
    controller::user::unlink_discord, data::link::DiscordLinkRepository,
    model::session::user::SessionUserId,
};

use super::*;

/// Expect 204 with the Discord link row removed
#[tokio::test]
async fn removes_discord_link() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;
    test.data()
        .insert_discord_link(user.id, "discord-123", "tester")
        .await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = unlink_discord(State(test.into_app_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let link = DiscordLinkRepository::new(&test.db)
        .get_by_user_id(user.id)
        .await?;
    assert!(link.is_none());

    Ok(())
}

/// Expect 204 even when no link exists, unlinking is idempotent
#[tokio::test]
async fn succeeds_without_existing_link() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = unlink_discord(State(test.into_app_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 401 when nobody is logged in
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = unlink_discord(State(test.into_app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
