use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_save: AtomicI64,
    pub cache_entries: AtomicI64,
    pub cache_hits: AtomicI64,
    pub cache_misses: AtomicI64,
    pub counters_flushed: AtomicI64,
    pub flush_failures: AtomicI64,
    pub ledger_subjects: AtomicI64,
    pub awards_granted: AtomicI64,
    pub awards_duplicate: AtomicI64,
    pub awards_pending: AtomicI64,
    pub storage_failures: AtomicI64,
    pub events_processed: AtomicI64,
    pub events_ignored: AtomicI64,
    pub deferred_scheduled: AtomicI64,
    pub deferred_skipped: AtomicI64,
    pub deferred_completed: AtomicI64,
    pub threshold_reloads: AtomicI64,
    pub reload_failures: AtomicI64,
}
