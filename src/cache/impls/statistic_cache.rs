use crate::cache::structs::counter_change::CounterChange;
use crate::cache::structs::counter_entry::CounterEntry;
use crate::cache::structs::statistic_cache::StatisticCache;
use crate::cache::types::counter_slot::{CounterShard, CounterSlot};
use crate::common::common::current_timestamp;
use crate::database::enums::storage_error::StorageError;
use crate::database::traits::storage_backend::StorageBackend;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::statistics::structs::subject_id::SubjectId;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use ahash::AHashMap;
use log::{debug, error, warn};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

const LOG_PREFIX: &str = "[CACHE]";

/// Largest value every storage backend can hold (signed 64-bit columns).
pub const MAX_COUNTER_VALUE: u64 = i64::MAX as u64;

type DirtyCounter = (SubjectId, StatisticKey, u64);

impl StatisticCache {
    pub fn new(storage: Arc<dyn StorageBackend>, stats: Arc<StatsAtomics>) -> StatisticCache {
        StatisticCache {
            shards: std::array::from_fn(|_| Arc::new(RwLock::new(AHashMap::new()))),
            storage,
            stats,
            flush_lock: Mutex::new(()),
        }
    }

    #[inline]
    fn shard(&self, subject: SubjectId) -> &CounterShard {
        &self.shards[subject.shard() as usize]
    }

    fn slot(&self, subject: SubjectId, key: &StatisticKey) -> CounterSlot {
        let shard = self.shard(subject);
        let lookup = (subject, key.clone());
        if let Some(slot) = shard.read_recursive().get(&lookup) {
            return slot.clone();
        }
        let mut lock = shard.write();
        lock.entry(lookup)
            .or_insert_with(|| {
                self.stats.update_stats(StatsEvent::CacheEntries, 1);
                Arc::new(Mutex::new(CounterEntry::default()))
            })
            .clone()
    }

    /// Locks the live slot of a counter, loading it from storage on first access.
    async fn locked_entry(&self, subject: SubjectId, key: &StatisticKey) -> Result<OwnedMutexGuard<CounterEntry>, StorageError> {
        loop {
            let mut entry = self.slot(subject, key).lock_owned().await;
            if entry.retired {
                continue;
            }
            if entry.loaded {
                self.stats.update_stats(StatsEvent::CacheHits, 1);
            } else {
                self.stats.update_stats(StatsEvent::CacheMisses, 1);
                let value = self.storage.load_counter(subject, key).await?;
                entry.value = value;
                entry.persisted = value;
                entry.loaded = true;
            }
            return Ok(entry);
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get(&self, subject: SubjectId, key: &StatisticKey) -> Result<u64, StorageError> {
        Ok(self.locked_entry(subject, key).await?.value)
    }

    /// Adds `delta` and returns the values before and after, both observed under the
    /// counter's lock. A result above [`MAX_COUNTER_VALUE`] is rejected and leaves the
    /// counter unchanged.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn increment(&self, subject: SubjectId, key: &StatisticKey, delta: u64) -> Result<CounterChange, StorageError> {
        let mut entry = self.locked_entry(subject, key).await?;
        let old = entry.value;
        let new = match old.checked_add(delta) {
            Some(new) if new <= MAX_COUNTER_VALUE => new,
            _ => {
                warn!("{} Rejected +{} on {} of {}: counter would exceed {}", LOG_PREFIX, delta, key, subject, MAX_COUNTER_VALUE);
                return Err(StorageError::InvalidData(format!("{key} of {subject} would exceed {MAX_COUNTER_VALUE}")));
            }
        };
        entry.value = new;
        Ok(CounterChange { old, new })
    }

    /// Writes every dirty counter in one batch. On failure the counters stay dirty.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn flush(&self) -> Result<usize, StorageError> {
        let _flush = self.flush_lock.lock().await;

        let mut slots = Vec::new();
        for shard in self.shards.iter() {
            let lock = shard.read_recursive();
            slots.extend(lock.iter().map(|(lookup, slot)| (lookup.clone(), slot.clone())));
        }

        let mut dirty: Vec<DirtyCounter> = Vec::new();
        let mut dirty_slots = Vec::new();
        for ((subject, key), slot) in slots {
            let entry = slot.lock().await;
            if entry.loaded && !entry.retired && entry.value != entry.persisted {
                dirty.push((subject, key, entry.value));
                drop(entry);
                dirty_slots.push(slot);
            }
        }
        if dirty.is_empty() {
            return Ok(0);
        }

        self.save(&dirty).await?;
        for ((_, _, value), slot) in dirty.iter().zip(dirty_slots) {
            let mut entry = slot.lock().await;
            entry.persisted = entry.persisted.max(*value);
        }
        debug!("{} Flushed {} counters", LOG_PREFIX, dirty.len());
        Ok(dirty.len())
    }

    /// Flushes and drops every cached counter of `subject`, after in-flight increments
    /// on them have finished. Returns the amount of evicted counters.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn evict(&self, subject: SubjectId) -> Result<usize, StorageError> {
        let _flush = self.flush_lock.lock().await;

        let slots: Vec<((SubjectId, StatisticKey), CounterSlot)> = {
            let lock = self.shard(subject).read_recursive();
            lock.iter()
                .filter(|((owner, _), _)| *owner == subject)
                .map(|(lookup, slot)| (lookup.clone(), slot.clone()))
                .collect()
        };
        if slots.is_empty() {
            return Ok(0);
        }

        let mut entries = Vec::with_capacity(slots.len());
        for (_, slot) in &slots {
            entries.push(slot.clone().lock_owned().await);
        }

        let dirty: Vec<DirtyCounter> = slots
            .iter()
            .zip(entries.iter())
            .filter(|(_, entry)| entry.loaded && !entry.retired && entry.value != entry.persisted)
            .map(|(((owner, key), _), entry)| (*owner, key.clone(), entry.value))
            .collect();
        if !dirty.is_empty() {
            self.save(&dirty).await?;
        }

        let mut lock = self.shard(subject).write();
        for ((lookup, slot), entry) in slots.iter().zip(entries.iter_mut()) {
            entry.persisted = entry.value;
            entry.retired = true;
            if lock.get(lookup).is_some_and(|current| Arc::ptr_eq(current, slot)) {
                lock.remove(lookup);
            }
        }
        drop(lock);

        self.stats.update_stats(StatsEvent::CacheEntries, -(slots.len() as i64));
        debug!("{} Evicted {} counters of {}", LOG_PREFIX, slots.len(), subject);
        Ok(slots.len())
    }

    async fn save(&self, dirty: &[DirtyCounter]) -> Result<(), StorageError> {
        match self.storage.save_counters(dirty).await {
            Ok(_) => {
                self.stats.update_stats(StatsEvent::CountersFlushed, dirty.len() as i64);
                self.stats.set_stats(StatsEvent::TimestampSave, current_timestamp());
                Ok(())
            }
            Err(e) => {
                self.stats.update_stats(StatsEvent::FlushFailures, 1);
                error!("{} Saving {} counters failed: {}", LOG_PREFIX, dirty.len(), e);
                Err(e)
            }
        }
    }

    pub fn contains(&self, subject: SubjectId, key: &StatisticKey) -> bool {
        self.shard(subject).read_recursive().contains_key(&(subject, key.clone()))
    }

    pub fn entries_amount(&self) -> usize {
        self.shards.iter().map(|shard| shard.read_recursive().len()).sum()
    }
}
