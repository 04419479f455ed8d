use crate::database::enums::storage_error::StorageError;
use crate::database::traits::storage_backend::StorageBackend;
use crate::ledger::structs::award_ledger::{AwardLedger, LedgerSlot};
use crate::ledger::structs::ledger_entry::LedgerEntry;
use crate::statistics::structs::award_id::AwardId;
use crate::statistics::structs::subject_id::SubjectId;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use ahash::{AHashMap, AHashSet};
use log::{debug, info};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

const LOG_PREFIX: &str = "[LEDGER]";

impl AwardLedger {
    pub fn new(storage: Arc<dyn StorageBackend>, stats: Arc<StatsAtomics>) -> AwardLedger {
        AwardLedger {
            shards: std::array::from_fn(|_| Arc::new(RwLock::new(AHashMap::new()))),
            storage,
            stats,
        }
    }

    fn slot(&self, subject: SubjectId) -> LedgerSlot {
        let shard = &self.shards[subject.shard() as usize];
        if let Some(slot) = shard.read_recursive().get(&subject) {
            return slot.clone();
        }
        let mut lock = shard.write();
        lock.entry(subject)
            .or_insert_with(|| {
                self.stats.update_stats(StatsEvent::LedgerSubjects, 1);
                Arc::new(Mutex::new(LedgerEntry::default()))
            })
            .clone()
    }

    async fn locked_entry(&self, subject: SubjectId) -> Result<OwnedMutexGuard<LedgerEntry>, StorageError> {
        loop {
            let mut entry = self.slot(subject).lock_owned().await;
            if entry.retired {
                continue;
            }
            if entry.granted.is_none() {
                let awards = self.storage.load_awards(subject).await?;
                entry.granted = Some(awards.into_iter().collect());
            }
            return Ok(entry);
        }
    }

    fn granted_set(entry: &mut LedgerEntry) -> &mut AHashSet<AwardId> {
        entry.granted.get_or_insert_with(AHashSet::new)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn is_granted(&self, subject: SubjectId, award: &AwardId) -> Result<bool, StorageError> {
        let mut entry = self.locked_entry(subject).await?;
        Ok(Self::granted_set(&mut entry).contains(award))
    }

    /// Records the award unless already present. Calling it twice is a no-op.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn mark_granted(&self, subject: SubjectId, award: &AwardId) -> Result<(), StorageError> {
        self.try_grant(subject, award).await.map(|_| ())
    }

    /// Atomic check-and-mark. Returns `true` for the single caller that recorded the
    /// award; storage holds the record by then.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn try_grant(&self, subject: SubjectId, award: &AwardId) -> Result<bool, StorageError> {
        let mut entry = self.locked_entry(subject).await?;
        if Self::granted_set(&mut entry).contains(award) {
            return Ok(false);
        }
        self.storage.record_award(subject, award).await?;
        Self::granted_set(&mut entry).insert(award.clone());
        info!("{} {} was granted {}", LOG_PREFIX, subject, award);
        Ok(true)
    }

    pub async fn granted(&self, subject: SubjectId) -> Result<Vec<AwardId>, StorageError> {
        let mut entry = self.locked_entry(subject).await?;
        let mut awards: Vec<AwardId> = Self::granted_set(&mut entry).iter().cloned().collect();
        awards.sort();
        Ok(awards)
    }

    /// Drops the cached set of `subject`. Grants are written through, nothing to flush.
    pub async fn evict(&self, subject: SubjectId) {
        let shard = &self.shards[subject.shard() as usize];
        let slot = shard.read_recursive().get(&subject).cloned();
        let Some(slot) = slot else {
            return;
        };
        let mut entry = slot.clone().lock_owned().await;
        entry.retired = true;
        let mut lock = shard.write();
        if lock.get(&subject).is_some_and(|current| Arc::ptr_eq(current, &slot)) {
            lock.remove(&subject);
            self.stats.update_stats(StatsEvent::LedgerSubjects, -1);
        }
        drop(lock);
        debug!("{} Evicted {}", LOG_PREFIX, subject);
    }
}
