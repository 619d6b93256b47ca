use axum::{extract::State, http::StatusCode, response::IntoResponse};
use warband::{
    controller::auth::discord_login,
    model::session::{auth::SessionAuthCsrf, user::SessionUserId},
};

use super::*;

/// Expect 401 when nobody is logged in, linking needs an account to link to
#[tokio::test]
async fn requires_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = discord_login(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect a 307 redirect to Discord with the CSRF state stored in session
#[tokio::test]
async fn redirects_when_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = discord_login(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let stored = SessionAuthCsrf::get(&test.session).await;
    assert!(stored.is_ok());

    Ok(())
}
