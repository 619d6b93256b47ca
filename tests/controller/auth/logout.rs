use axum::{http::StatusCode, response::IntoResponse};
use warband::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

/// Expect logout to clear the session and redirect back to login
#[tokio::test]
async fn clears_session_and_redirects() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let logged_in_as = SessionUserId::get(&test.session).await.unwrap();
    assert!(logged_in_as.is_none());

    Ok(())
}

/// Expect logout to redirect even for a session that never logged in, the
/// store is only cleared when there is actually a user to clear
#[tokio::test]
async fn redirects_without_session_data() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
