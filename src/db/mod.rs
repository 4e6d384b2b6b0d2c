//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool ownership and the query surface

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Question, StudentResponse};
pub use schema::SQLITE_INIT;
pub use sqlite::{ClassroomStorage, SqlitePool};
