//! # scoda-store
//!
//! Client-side persistence for Scoda: a small key/value "local storage"
//! backed by SQLite, an in-memory equivalent for tests and ephemeral runs,
//! and the session persistence layer (current user + bearer token) built on
//! top of either.

pub mod database;
pub mod kv;
pub mod memory;
pub mod migrations;
pub mod session;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use session::{SessionPersistence, SessionSnapshot};
