//! Storage layer: the database facade and document/title storage.
//!
//! All data lives in memory for the lifetime of a [`Database`]; there is
//! no persistence, update, or deletion — `clear` drops everything at once.

/// Database facade orchestrating pipeline, index, queries, and storage.
pub mod database;

pub use database::{Database, DatabaseData, DatabaseOptions};
