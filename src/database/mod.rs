//! Persistent storage for counters, granted achievements and connection dates.
//!
//! The engine only talks to a [`StorageBackend`](traits::storage_backend::StorageBackend).
//! Two implementations ship with the crate:
//!
//! - [`DatabaseConnector`](structs::database_connector::DatabaseConnector): SQLite,
//!   MySQL or PostgreSQL through `sqlx`, selected by `database.engine`
//! - [`MemoryStorage`](structs::memory_storage::MemoryStorage): process-local maps, used
//!   when `database.persistent` is disabled and in tests
//!
//! Table and column names come from `[database_structure]` and are validated against an
//! identifier pattern before any query is built.

pub mod enums;
pub mod helpers;
pub mod impls;
pub mod structs;
pub mod traits;
