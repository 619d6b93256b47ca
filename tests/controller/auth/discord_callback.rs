use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use warband::{
    controller::auth::{discord_callback, CallbackParams},
    data::link::DiscordLinkRepository,
    model::session::{auth::SessionAuthCsrf, user::SessionUserId},
};

use super::*;

fn mock_discord_endpoints(test: &mut TestSetup) {
    let token = test
        .server
        .mock("POST", "/oauth/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"granted-token","token_type":"bearer"}"#)
        .create();

    let identity = test
        .server
        .mock("GET", "/users/@me")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"discord-123","username":"tester"}"#)
        .create();

    test.mocks.push(std::sync::Arc::new(token));
    test.mocks.push(std::sync::Arc::new(identity));
}

/// Expect a valid callback to store the Discord identity for the session user
#[tokio::test]
async fn links_discord_identity() -> Result<(), TestError> {
    let mut test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();
    SessionAuthCsrf::insert(&test.session, "callback-state")
        .await
        .unwrap();

    mock_discord_endpoints(&mut test);

    let params = Query(CallbackParams {
        state: "callback-state".to_string(),
        code: "auth-code".to_string(),
    });
    let result =
        discord_callback(State(test.into_app_state()), test.session.clone(), params).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let link = DiscordLinkRepository::new(&test.db)
        .get_by_user_id(user.id)
        .await?;
    assert!(link.is_some());
    let link = link.unwrap();
    assert_eq!(link.discord_id, "discord-123");
    assert_eq!(link.discord_name, "tester");

    test.assert_mocks();

    Ok(())
}

/// Expect 401 when the callback arrives without a logged-in user
#[tokio::test]
async fn requires_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let params = Query(CallbackParams {
        state: "callback-state".to_string(),
        code: "auth-code".to_string(),
    });
    let result =
        discord_callback(State(test.into_app_state()), test.session.clone(), params).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 and no link row when the echoed state does not match
#[tokio::test]
async fn rejects_state_mismatch() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();
    SessionAuthCsrf::insert(&test.session, "expected-state")
        .await
        .unwrap();

    let params = Query(CallbackParams {
        state: "forged-state".to_string(),
        code: "auth-code".to_string(),
    });
    let result =
        discord_callback(State(test.into_app_state()), test.session.clone(), params).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let link = DiscordLinkRepository::new(&test.db)
        .get_by_user_id(user.id)
        .await?;
    assert!(link.is_none());

    Ok(())
}
