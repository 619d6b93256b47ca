//! Tests for the authentication endpoints: both OAuth flows and logout.

mod bnet_callback;
mod bnet_login;
mod discord_callback;
mod discord_login;
mod logout;

use super::*;
