use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_save: i64,
    pub cache_entries: i64,
    pub cache_hits: i64,
    pub cache_misses: i64,
    pub counters_flushed: i64,
    pub flush_failures: i64,
    pub ledger_subjects: i64,
    pub awards_granted: i64,
    pub awards_duplicate: i64,
    pub awards_pending: i64,
    pub storage_failures: i64,
    pub events_processed: i64,
    pub events_ignored: i64,
    pub deferred_scheduled: i64,
    pub deferred_skipped: i64,
    pub deferred_completed: i64,
    pub threshold_reloads: i64,
    pub reload_failures: i64,
}
