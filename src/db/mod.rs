//! Database module: models and schema for quick-access pair storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the storage itself

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::QuickAccessPair;
pub use schema::SQLITE_INIT;
pub use sqlite::{QuickAccessPairsStorage, SqlitePool};
