use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
};
use warband::{
    controller::user::refresh, data::character::CharacterRepository,
    model::session::user::SessionUserId,
};
use warband_test_utils::constant::TEST_ACCESS_TOKEN;

use super::*;

fn bearer_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        format!("Bearer {}", TEST_ACCESS_TOKEN).parse().unwrap(),
    );
    headers
}

/// Expect 200 with the refreshed roster, which also lands in the database
#[tokio::test]
async fn refreshes_and_returns_roster() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let characters = vec![ProviderFixtures::account_character(
        "Thrall",
        "stormrage",
        80,
        "Shaman",
    )];
    test.provider().with_account_profile(characters, 1);
    test.provider().with_character_fields(
        "stormrage",
        "thrall",
        Some("Earthen Ring"),
        2400.0,
        "Enhancement",
    );

    let result = refresh(
        State(test.into_app_state()),
        test.session.clone(),
        bearer_headers(),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = CharacterRepository::new(&test.db)
        .get_many_by_user_id(user.id)
        .await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Thrall");

    test.assert_mocks();

    Ok(())
}

/// Expect 400 when the Authorization header is missing, a refresh cannot run
/// without a provider token
#[tokio::test]
async fn rejects_missing_bearer_token() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = refresh(
        State(test.into_app_state()),
        test.session.clone(),
        HeaderMap::new(),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = CharacterRepository::new(&test.db)
        .get_many_by_user_id(user.id)
        .await?;
    assert!(stored.is_empty());

    Ok(())
}

/// Expect 400 when the Authorization header is not a bearer token
#[tokio::test]
async fn rejects_non_bearer_authorization() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

    let result = refresh(State(test.into_app_state()), test.session, headers).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 401 when nobody is logged in
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = refresh(
        State(test.into_app_state()),
        test.session,
        bearer_headers(),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
