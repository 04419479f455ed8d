/// Errors surfaced by engine operations.
pub mod engine_error;
