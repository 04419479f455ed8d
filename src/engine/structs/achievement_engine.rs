use crate::cache::structs::statistic_cache::StatisticCache;
use crate::config::structs::configuration::Configuration;
use crate::database::traits::storage_backend::StorageBackend;
use crate::engine::structs::award_candidate::AwardCandidate;
use crate::engine::traits::award_notifier::AwardNotifier;
use crate::guard::structs::deferred_task_guard::DeferredTaskGuard;
use crate::ledger::structs::award_ledger::AwardLedger;
use crate::statistics::structs::subject_id::SubjectId;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::thresholds::structs::threshold_registry::ThresholdRegistry;
use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;

pub struct AchievementEngine {
    pub config: Arc<Configuration>,
    pub thresholds: Arc<ThresholdRegistry>,
    pub cache: Arc<StatisticCache>,
    pub ledger: Arc<AwardLedger>,
    pub guard: Arc<DeferredTaskGuard>,
    pub storage: Arc<dyn StorageBackend>,
    pub notifier: Arc<dyn AwardNotifier>,
    pub stats: Arc<StatsAtomics>,
    /// Crossed thresholds whose ledger write failed, retried on the subject's next event.
    pub pending: Arc<RwLock<AHashMap<SubjectId, Vec<AwardCandidate>>>>,
}
