use crate::common::common::current_timestamp;
use crate::database::enums::storage_error::StorageError;
use crate::database::structs::memory_storage::MemoryStorage;
use crate::database::traits::storage_backend::StorageBackend;
use crate::statistics::structs::award_id::AwardId;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::statistics::structs::subject_id::SubjectId;
use async_trait::async_trait;

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }

    /// Stored counter value without going through the trait.
    pub fn counter(&self, subject: SubjectId, key: &StatisticKey) -> Option<u64> {
        self.counters.read_recursive().get(&(subject, key.clone())).copied()
    }

    pub fn awards_amount(&self, subject: SubjectId) -> usize {
        self.awards.read_recursive().get(&subject).map(|awards| awards.len()).unwrap_or(0)
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn load_counter(&self, subject: SubjectId, key: &StatisticKey) -> Result<u64, StorageError> {
        Ok(self.counter(subject, key).unwrap_or(0))
    }

    async fn save_counter(&self, subject: SubjectId, key: &StatisticKey, value: u64) -> Result<(), StorageError> {
        self.counters.write().insert((subject, key.clone()), value);
        Ok(())
    }

    async fn save_counters(&self, counters: &[(SubjectId, StatisticKey, u64)]) -> Result<(), StorageError> {
        let mut lock = self.counters.write();
        for (subject, key, value) in counters {
            lock.insert((*subject, key.clone()), *value);
        }
        Ok(())
    }

    async fn load_awards(&self, subject: SubjectId) -> Result<Vec<AwardId>, StorageError> {
        Ok(self.awards.read_recursive().get(&subject).map(|awards| awards.keys().cloned().collect()).unwrap_or_default())
    }

    async fn is_award_granted(&self, subject: SubjectId, award: &AwardId) -> Result<bool, StorageError> {
        Ok(self.awards.read_recursive().get(&subject).is_some_and(|awards| awards.contains_key(award)))
    }

    async fn record_award(&self, subject: SubjectId, award: &AwardId) -> Result<(), StorageError> {
        self.awards.write().entry(subject).or_default().entry(award.clone()).or_insert_with(current_timestamp);
        Ok(())
    }

    async fn load_connection_date(&self, subject: SubjectId) -> Result<Option<String>, StorageError> {
        Ok(self.connections.read_recursive().get(&subject).cloned())
    }

    async fn save_connection_date(&self, subject: SubjectId, date: &str) -> Result<(), StorageError> {
        self.connections.write().insert(subject, date.to_string());
        Ok(())
    }

    async fn create_tables(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
