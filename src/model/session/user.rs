//! Logged-in user identity stored in the session.
//!
//! The ID is carried as a string because session values round-trip through
//! the store's JSON codec; [`SessionUserId::get`] parses it back and reports
//! a corrupt value as an error rather than treating it as a logged-out
//! session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

pub const SESSION_USER_ID_KEY: &str = "warband:user:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Record the user as logged in for the rest of the session.
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// The logged-in user's ID, `None` when nobody is logged in.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session user id: {}", e))
                })
            })
            .transpose()
    }
}
