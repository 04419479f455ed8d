use crate::statistics::structs::award_id::AwardId;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::statistics::structs::subject_id::SubjectId;
use ahash::AHashMap;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Storage kept in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub(crate) counters: RwLock<AHashMap<(SubjectId, StatisticKey), u64>>,
    pub(crate) awards: RwLock<AHashMap<SubjectId, BTreeMap<AwardId, i64>>>,
    pub(crate) connections: RwLock<AHashMap<SubjectId, String>>,
}
