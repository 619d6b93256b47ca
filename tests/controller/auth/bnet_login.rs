use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use axum::extract::State;
use warband::{controller::auth::bnet_login, model::session::auth::SessionAuthCsrf};

use super::*;

/// Expect a 307 redirect to the provider with the CSRF state stored in session
#[tokio::test]
async fn redirects_to_provider_and_stores_state() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = bnet_login(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp
        .headers()
        .get(LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.contains("client_id=bnet-client-id"));
    assert!(location.contains("response_type=code"));

    let stored = SessionAuthCsrf::get(&test.session).await;
    assert!(stored.is_ok());

    // The redirect carries the same state the session stored
    assert!(location.contains(&stored.unwrap()));

    Ok(())
}

/// Expect each login attempt to overwrite the previous CSRF state
#[tokio::test]
async fn repeated_login_rotates_state() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let state = test.into_app_state();

    let _ = bnet_login(State(state.clone()), test.session.clone()).await;
    let first = SessionAuthCsrf::get(&test.session).await.unwrap();

    let _ = bnet_login(State(state), test.session.clone()).await;
    let second = SessionAuthCsrf::get(&test.session).await.unwrap();

    assert_ne!(first, second);

    Ok(())
}
