//! Engine data structures.

/// The engine and its owned subsystems.
pub mod achievement_engine;

/// Threshold awaiting a ledger write.
pub mod award_candidate;

/// Payload handed to the notifier.
pub mod award_notification;

/// Notifier forwarding to a tokio channel.
pub mod channel_notifier;

/// Notifier writing to the log.
pub mod logging_notifier;

/// In-process session provider.
pub mod online_sessions;
