//! Database repositories.
//!
//! Each repository wraps the queries for one table. Repositories are generic
//! over the connection so the same methods work on a plain connection or
//! inside a transaction.

pub mod character;
pub mod link;
pub mod main_character;
pub mod user;
