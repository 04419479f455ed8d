/// Sentry transaction helpers for storage-bound operations.
pub mod sentry_tracing;
