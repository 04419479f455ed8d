use crate::cache::types::counter_slot::CounterShard;
use crate::database::traits::storage_backend::StorageBackend;
use crate::stats::structs::stats_atomics::StatsAtomics;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct StatisticCache {
    /// Shard assignment: `shards[subject.shard()]`
    pub(crate) shards: [CounterShard; 256],
    pub(crate) storage: Arc<dyn StorageBackend>,
    pub(crate) stats: Arc<StatsAtomics>,
    /// Held by `flush` and `evict`, always before any slot mutex.
    pub(crate) flush_lock: Mutex<()>,
}
