use crate::database::traits::storage_backend::StorageBackend;
use crate::ledger::structs::ledger_entry::LedgerEntry;
use crate::statistics::structs::subject_id::SubjectId;
use crate::stats::structs::stats_atomics::StatsAtomics;
use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type LedgerSlot = Arc<Mutex<LedgerEntry>>;

pub struct AwardLedger {
    pub(crate) shards: [Arc<RwLock<AHashMap<SubjectId, LedgerSlot>>>; 256],
    pub(crate) storage: Arc<dyn StorageBackend>,
    pub(crate) stats: Arc<StatsAtomics>,
}
