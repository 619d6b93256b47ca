use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use warband::{
    controller::user::set_main,
    data::main_character::MainCharacterRepository,
    model::{api::SetMainDto, session::user::SessionUserId},
};

use super::*;

/// Expect 404 and no selection when the named character is not in the roster
#[tokio::test]
async fn rejects_character_outside_roster() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let body = Json(SetMainDto {
        character_name: "Thrall".to_string(),
        realm: "stormrage".to_string(),
    });
    let result = set_main(State(test.into_app_state()), test.session.clone(), body).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().status(), StatusCode::NOT_FOUND);

    let main = MainCharacterRepository::new(&test.db)
        .get_by_user_id(user.id)
        .await?;
    assert!(main.is_none());

    Ok(())
}

/// Expect 200 and a stored selection for a character in the roster
#[tokio::test]
async fn sets_main_from_roster() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;
    test.data()
        .insert_character(user.id, "Thrall", "stormrage")
        .await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let body = Json(SetMainDto {
        character_name: "Thrall".to_string(),
        realm: "stormrage".to_string(),
    });
    let result = set_main(State(test.into_app_state()), test.session.clone(), body).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().status(), StatusCode::OK);

    let main = MainCharacterRepository::new(&test.db)
        .get_by_user_id(user.id)
        .await?;
    assert!(main.is_some());
    assert_eq!(main.unwrap().character_name, "Thrall");

    Ok(())
}

/// Expect a second selection to replace the first, a user has one main
#[tokio::test]
async fn replaces_previous_selection() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;
    test.data()
        .insert_character(user.id, "Thrall", "stormrage")
        .await?;
    test.data()
        .insert_character(user.id, "Jaina", "draenor")
        .await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let state = test.into_app_state();

    let first = Json(SetMainDto {
        character_name: "Thrall".to_string(),
        realm: "stormrage".to_string(),
    });
    let result = set_main(State(state.clone()), test.session.clone(), first).await;
    assert!(result.is_ok());

    let second = Json(SetMainDto {
        character_name: "Jaina".to_string(),
        realm: "draenor".to_string(),
    });
    let result = set_main(State(state), test.session.clone(), second).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().status(), StatusCode::OK);

    let main = MainCharacterRepository::new(&test.db)
        .get_by_user_id(user.id)
        .await?;
    assert!(main.is_some());
    assert_eq!(main.unwrap().character_name, "Jaina");

    Ok(())
}

/// Expect 401 when nobody is logged in
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let body = Json(SetMainDto {
        character_name: "Thrall".to_string(),
        realm: "stormrage".to_string(),
    });
    let result = set_main(State(test.into_app_state()), test.session, body).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
