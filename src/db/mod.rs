//! Database module
//!
//! SQLite storage for favorites.

pub mod connection;
pub mod migrations;

pub use connection::{Database, DbError, DbResult};
