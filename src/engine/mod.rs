//! Achievement engine.
//!
//! Orchestrates one "increase a statistic and award what it unlocks" step:
//!
//! 1. the [`StatisticCache`](crate::cache::structs::statistic_cache::StatisticCache)
//!    applies the delta and returns the old and new value
//! 2. the current [`ThresholdTable`](crate::thresholds::structs::threshold_table::ThresholdTable)
//!    resolves every threshold crossed between them
//! 3. the [`AwardLedger`](crate::ledger::structs::award_ledger::AwardLedger) lets each
//!    award through once, after it was stored
//! 4. the [`AwardNotifier`](traits::award_notifier::AwardNotifier) receives one
//!    notification per newly granted award
//!
//! Connections are counted on a deferred path: a join, world change or game mode change
//! schedules a check that runs after `engine.connection_check_delay` milliseconds,
//! re-verifies the session and counts at most one connection per day.
//!
//! # Example
//!
//! ```rust,ignore
//! let engine = Arc::new(AchievementEngine::new(config, storage, Arc::new(LoggingNotifier))?);
//! let key = StatisticKey::multiple(MultipleCategory::Places, "stone");
//! let granted = engine.process_increase(subject, &key, 4).await?;
//! ```

/// Engine error enumeration.
pub mod enums;

/// Implementation blocks for the engine, notifiers and sessions.
pub mod impls;

/// Engine data structures.
pub mod structs;

/// Collaborator traits (notifications, sessions).
pub mod traits;
