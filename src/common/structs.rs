//! Common data structures.

/// Simple message error used by the binary.
pub mod custom_error;
