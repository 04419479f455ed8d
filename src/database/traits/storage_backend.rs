use crate::database::enums::storage_error::StorageError;
use crate::statistics::structs::award_id::AwardId;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::statistics::structs::subject_id::SubjectId;
use async_trait::async_trait;

/// Durable store behind the cache and the ledger.
///
/// Implementations must accept concurrent calls for distinct subjects. Counters are
/// written back in batches by the cache; awards are written through by the ledger before
/// any notification leaves the engine.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Stored value of a counter, `0` when no row exists.
    async fn load_counter(&self, subject: SubjectId, key: &StatisticKey) -> Result<u64, StorageError>;

    async fn save_counter(&self, subject: SubjectId, key: &StatisticKey, value: u64) -> Result<(), StorageError>;

    /// Writes all counters in one transaction.
    async fn save_counters(&self, counters: &[(SubjectId, StatisticKey, u64)]) -> Result<(), StorageError>;

    async fn load_awards(&self, subject: SubjectId) -> Result<Vec<AwardId>, StorageError>;

    async fn is_award_granted(&self, subject: SubjectId, award: &AwardId) -> Result<bool, StorageError>;

    /// Idempotent; recording an award twice keeps the first row.
    async fn record_award(&self, subject: SubjectId, award: &AwardId) -> Result<(), StorageError>;

    async fn load_connection_date(&self, subject: SubjectId) -> Result<Option<String>, StorageError>;

    async fn save_connection_date(&self, subject: SubjectId, date: &str) -> Result<(), StorageError>;

    async fn create_tables(&self) -> Result<(), StorageError>;
}
