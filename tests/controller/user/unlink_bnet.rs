use axum::{extract::State, http::StatusCode, response::IntoResponse};
use warband::{
    controller::user::unlink_bnet,
    data::{
        character::CharacterRepository, link::BattlenetLinkRepository,
        main_character::MainCharacterRepository,
    },
    model::session::user::SessionUserId,
};

use super::*;

/// Expect 204 with the roster, main selection, and link row all removed
#[tokio::test]
async fn removes_roster_main_and_link() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.data().insert_user().await?;
    test.data()
        .insert_character(user.id, "Thrall", "stormrage")
        .await?;
    test.data()
        .insert_main_character(user.id, "Thrall", "stormrage")
        .await?;
    test.data().insert_battlenet_link(user.id).await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = unlink_bnet(State(test.into_app_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let roster = CharacterRepository::new(&test.db)
        .get_many_by_user_id(user.id)
        .await?;
    assert!(roster.is_empty());

    let main = MainCharacterRepository::new(&test.db)
        .get_by_user_id(user.id)
        .await?;
    assert!(main.is_none());

    let link = BattlenetLinkRepository::new(&test.db)
        .get_by_user_id(user.id)
        .await?;
    assert!(link.is_none());

    Ok(())
}

/// Expect 401 when nobody is logged in
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = unlink_bnet(State(test.into_app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
