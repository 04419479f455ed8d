use crate::common::common::current_timestamp;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use std::sync::atomic::{AtomicI64, Ordering};

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(current_timestamp(), Ordering::SeqCst);
        stats
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::TimestampSave => &self.timestamp_run_save,
            StatsEvent::CacheEntries => &self.cache_entries,
            StatsEvent::CacheHits => &self.cache_hits,
            StatsEvent::CacheMisses => &self.cache_misses,
            StatsEvent::CountersFlushed => &self.counters_flushed,
            StatsEvent::FlushFailures => &self.flush_failures,
            StatsEvent::LedgerSubjects => &self.ledger_subjects,
            StatsEvent::AwardsGranted => &self.awards_granted,
            StatsEvent::AwardsDuplicate => &self.awards_duplicate,
            StatsEvent::AwardsPending => &self.awards_pending,
            StatsEvent::StorageFailures => &self.storage_failures,
            StatsEvent::EventsProcessed => &self.events_processed,
            StatsEvent::EventsIgnored => &self.events_ignored,
            StatsEvent::DeferredScheduled => &self.deferred_scheduled,
            StatsEvent::DeferredSkipped => &self.deferred_skipped,
            StatsEvent::DeferredCompleted => &self.deferred_completed,
            StatsEvent::ThresholdReloads => &self.threshold_reloads,
            StatsEvent::ReloadFailures => &self.reload_failures,
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            timestamp_run_save: self.timestamp_run_save.load(Ordering::SeqCst),
            cache_entries: self.cache_entries.load(Ordering::SeqCst),
            cache_hits: self.cache_hits.load(Ordering::SeqCst),
            cache_misses: self.cache_misses.load(Ordering::SeqCst),
            counters_flushed: self.counters_flushed.load(Ordering::SeqCst),
            flush_failures: self.flush_failures.load(Ordering::SeqCst),
            ledger_subjects: self.ledger_subjects.load(Ordering::SeqCst),
            awards_granted: self.awards_granted.load(Ordering::SeqCst),
            awards_duplicate: self.awards_duplicate.load(Ordering::SeqCst),
            awards_pending: self.awards_pending.load(Ordering::SeqCst),
            storage_failures: self.storage_failures.load(Ordering::SeqCst),
            events_processed: self.events_processed.load(Ordering::SeqCst),
            events_ignored: self.events_ignored.load(Ordering::SeqCst),
            deferred_scheduled: self.deferred_scheduled.load(Ordering::SeqCst),
            deferred_skipped: self.deferred_skipped.load(Ordering::SeqCst),
            deferred_completed: self.deferred_completed.load(Ordering::SeqCst),
            threshold_reloads: self.threshold_reloads.load(Ordering::SeqCst),
            reload_failures: self.reload_failures.load(Ordering::SeqCst),
        }
    }
}
