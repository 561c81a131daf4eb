//! Persistence layer: storage shapes, schema and the local SQLite store.
//!
//! Layout:
//! - `models/`: document DTOs and relational rows, one module per table
//! - `shape.rs`: structural validation of raw documents
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: sqlx-backed local store

pub mod models;
pub mod schema;
pub mod shape;
pub mod sqlite;

pub use schema::SQLITE_INIT;
pub use shape::{Document, ShapeCheck};
pub use sqlite::{LocalStore, SqlitePool};
