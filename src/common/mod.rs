//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Graceful shutdown waiting
//! - Connection date formatting
//!
//! # Data Structures
//!
//! - `CustomError` - Binary-level error type

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

#[cfg(test)]
mod tests;
