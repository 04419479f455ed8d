//! Database enumerations.

/// Supported SQL engines.
pub mod database_drivers;

/// Errors raised by storage backends.
pub mod storage_error;
