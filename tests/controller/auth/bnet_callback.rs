use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use warband::{
    controller::auth::{bnet_callback, CallbackParams},
    data::{character::CharacterRepository, user::UserRepository},
    model::session::{auth::SessionAuthCsrf, user::SessionUserId},
};
use warband_test_utils::constant::{TEST_BATTLENET_ID, TEST_BATTLETAG};

use super::*;

fn mock_token_endpoint(test: &mut TestSetup) {
    let mock = test
        .server
        .mock("POST", "/oauth/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"granted-token","token_type":"bearer"}"#)
        .create();

    test.mocks.push(std::sync::Arc::new(mock));
}

/// Expect a valid callback to create the user, log them in, and store the
/// refreshed roster
#[tokio::test]
async fn logs_in_and_stores_roster() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;

    SessionAuthCsrf::insert(&test.session, "callback-state")
        .await
        .unwrap();

    mock_token_endpoint(&mut test);
    test.provider()
        .with_userinfo(TEST_BATTLENET_ID, TEST_BATTLETAG, 1);

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

    let params = Query(CallbackParams {
        state: "callback-state".to_string(),
        code: "auth-code".to_string(),
    });
    let result = bnet_callback(State(test.into_app_state()), test.session.clone(), params).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let user = UserRepository::new(&test.db)
        .get_by_battlenet_id(TEST_BATTLENET_ID)
        .await?;
    assert!(user.is_some());
    let user = user.unwrap();

    let logged_in_as = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(logged_in_as, Some(user.id));

    let roster = CharacterRepository::new(&test.db)
        .get_many_by_user_id(user.id)
        .await?;
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "Thrall");

    test.assert_mocks();

    Ok(())
}

/// Expect 400 and no account creation when the echoed state does not match
#[tokio::test]
async fn rejects_state_mismatch() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    SessionAuthCsrf::insert(&test.session, "expected-state")
        .await
        .unwrap();

    let params = Query(CallbackParams {
        state: "forged-state".to_string(),
        code: "auth-code".to_string(),
    });
    let result = bnet_callback(State(test.into_app_state()), test.session.clone(), params).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let user = UserRepository::new(&test.db)
        .get_by_battlenet_id(TEST_BATTLENET_ID)
        .await?;
    assert!(user.is_none());

    Ok(())
}

/// Expect 400 on a callback that arrives without a login having stored state
#[tokio::test]
async fn rejects_callback_without_stored_state() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let params = Query(CallbackParams {
        state: "any-state".to_string(),
        code: "auth-code".to_string(),
    });
    let result = bnet_callback(State(test.into_app_state()), test.session.clone(), params).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the login to succeed even when the roster listing is down, the
/// user just ends up with an empty roster until the next refresh
#[tokio::test]
async fn login_survives_roster_outage() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;

    SessionAuthCsrf::insert(&test.session, "callback-state")
        .await
        .unwrap();

    mock_token_endpoint(&mut test);
    test.provider()
        .with_userinfo(TEST_BATTLENET_ID, TEST_BATTLETAG, 1);
    test.provider().with_account_profile_error(500);

    let params = Query(CallbackParams {
        state: "callback-state".to_string(),
        code: "auth-code".to_string(),
    });
    let result = bnet_callback(State(test.into_app_state()), test.session.clone(), params).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let user = UserRepository::new(&test.db)
        .get_by_battlenet_id(TEST_BATTLENET_ID)
        .await?;
    assert!(user.is_some());
    let user = user.unwrap();

    assert_eq!(
        SessionUserId::get(&test.session).await.unwrap(),
        Some(user.id)
    );

    let roster = CharacterRepository::new(&test.db)
        .get_many_by_user_id(user.id)
        .await?;
    assert!(roster.is_empty());

    Ok(())
}
