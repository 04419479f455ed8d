//! Statistics event types for tracking engine metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `StatsAtomics::update_stats()` (relative) and
/// `StatsAtomics::set_stats()` (absolute).
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    TimestampSave,
    CacheEntries,
    CacheHits,
    CacheMisses,
    CountersFlushed,
    FlushFailures,
    LedgerSubjects,
    AwardsGranted,
    AwardsDuplicate,
    AwardsPending,
    StorageFailures,
    EventsProcessed,
    EventsIgnored,
    DeferredScheduled,
    DeferredSkipped,
    DeferredCompleted,
    ThresholdReloads,
    ReloadFailures,
}
