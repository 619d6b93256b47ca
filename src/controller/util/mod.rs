pub mod csrf;
pub mod get_user;
