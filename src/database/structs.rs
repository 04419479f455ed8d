//! Storage structures.

/// Engine dispatcher over the SQL connectors.
pub mod database_connector;

/// MySQL connection pool.
pub mod database_connector_mysql;

/// PostgreSQL connection pool.
pub mod database_connector_pgsql;

/// SQLite connection pool.
pub mod database_connector_sqlite;

/// In-process storage.
pub mod memory_storage;
