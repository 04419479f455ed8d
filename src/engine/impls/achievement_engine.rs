use crate::cache::structs::statistic_cache::StatisticCache;
use crate::config::structs::achievements_config::AchievementsConfig;
use crate::config::structs::configuration::Configuration;
use crate::database::traits::storage_backend::StorageBackend;
use crate::engine::enums::engine_error::EngineError;
use crate::engine::structs::achievement_engine::AchievementEngine;
use crate::engine::structs::award_candidate::AwardCandidate;
use crate::engine::structs::award_notification::AwardNotification;
use crate::engine::traits::award_notifier::AwardNotifier;
use crate::guard::structs::deferred_task_guard::DeferredTaskGuard;
use crate::ledger::structs::award_ledger::AwardLedger;
use crate::statistics::enums::multiple_category::MultipleCategory;
use crate::statistics::structs::award_id::AwardId;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::statistics::structs::subject_id::SubjectId;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::thresholds::structs::threshold_registry::ThresholdRegistry;
use ahash::AHashMap;
use log::{debug, error, warn};
use parking_lot::RwLock;
use std::sync::Arc;

const LOG_PREFIX: &str = "[ENGINE]";

impl AchievementEngine {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(config: Arc<Configuration>, storage: Arc<dyn StorageBackend>, notifier: Arc<dyn AwardNotifier>) -> Result<AchievementEngine, EngineError>
    {
        let stats = Arc::new(StatsAtomics::new());
        let thresholds = ThresholdRegistry::new(&config.achievements, stats.clone())?;
        Ok(AchievementEngine {
            config,
            thresholds: Arc::new(thresholds),
            cache: Arc::new(StatisticCache::new(storage.clone(), stats.clone())),
            ledger: Arc::new(AwardLedger::new(storage.clone(), stats.clone())),
            guard: Arc::new(DeferredTaskGuard::new()),
            storage,
            notifier,
            stats,
            pending: Arc::new(RwLock::new(AHashMap::new())),
        })
    }

    /// Increases `key` by `delta` and returns the awards this increase granted, in
    /// ascending threshold order.
    ///
    /// A storage failure while loading the counter returns an error before anything
    /// changed. A failure while recording an award returns an error after the counter
    /// moved; the awards not yet recorded are retried on the subject's next event and
    /// are never notified before they are stored.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn process_increase(&self, subject: SubjectId, key: &StatisticKey, delta: u64) -> Result<Vec<AwardId>, EngineError>
    {
        let table = self.thresholds.current();
        if delta == 0 || !table.is_enabled(key.category()) {
            self.stats.update_stats(StatsEvent::EventsIgnored, 1);
            return Ok(vec![]);
        }

        let change = self.cache.increment(subject, key, delta).await?;
        self.stats.update_stats(StatsEvent::EventsProcessed, 1);

        let mut candidates = self.take_pending(subject);
        candidates.extend(
            table.resolve_crossed(key, change.old, change.new)
                .into_iter()
                .map(|threshold| AwardCandidate { key: key.clone(), threshold })
        );
        if candidates.is_empty() {
            return Ok(vec![]);
        }
        debug!("{} {} {} went from {} to {}, {} candidates", LOG_PREFIX, subject, key, change.old, change.new, candidates.len());
        self.grant_candidates(subject, candidates).await
    }

    /// Routes a multiple-category event to every configured sub-key group matching one of
    /// `names`. Each group is increased once even when several names match it.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn process_event(&self, subject: SubjectId, category: MultipleCategory, names: &[&str], delta: u64) -> Result<Vec<AwardId>, EngineError>
    {
        let table = self.thresholds.current();
        let mut groups: Vec<String> = names.iter().flat_map(|name| table.find_sub_keys(category, name)).collect();
        groups.sort();
        groups.dedup();
        if groups.is_empty() {
            self.stats.update_stats(StatsEvent::EventsIgnored, 1);
            return Ok(vec![]);
        }

        let mut granted = Vec::new();
        for group in groups {
            granted.extend(self.process_increase(subject, &StatisticKey::multiple(category, group), delta).await?);
        }
        Ok(granted)
    }

    /// Error-isolating form of [`process_increase`](Self::process_increase) for event
    /// producers: failures are logged and counted, and an empty list is returned.
    pub async fn record_event(&self, subject: SubjectId, key: &StatisticKey, delta: u64) -> Vec<AwardId>
    {
        match self.process_increase(subject, key, delta).await {
            Ok(granted) => granted,
            Err(e) => {
                self.stats.update_stats(StatsEvent::StorageFailures, 1);
                error!("{} Unable to process {} for {}: {}", LOG_PREFIX, key, subject, e);
                vec![]
            }
        }
    }

    /// Error-isolating form of [`process_event`](Self::process_event).
    pub async fn record_named_event(&self, subject: SubjectId, category: MultipleCategory, names: &[&str], delta: u64) -> Vec<AwardId>
    {
        match self.process_event(subject, category, names, delta).await {
            Ok(granted) => granted,
            Err(e) => {
                self.stats.update_stats(StatsEvent::StorageFailures, 1);
                error!("{} Unable to process {} {:?} for {}: {}", LOG_PREFIX, category, names, subject, e);
                vec![]
            }
        }
    }

    /// Retries awards whose ledger write failed earlier.
    pub async fn retry_pending(&self, subject: SubjectId) -> Result<Vec<AwardId>, EngineError>
    {
        let candidates = self.take_pending(subject);
        if candidates.is_empty() {
            return Ok(vec![]);
        }
        self.grant_candidates(subject, candidates).await
    }

    async fn grant_candidates(&self, subject: SubjectId, candidates: Vec<AwardCandidate>) -> Result<Vec<AwardId>, EngineError>
    {
        let mut granted = Vec::new();
        for (index, candidate) in candidates.iter().enumerate() {
            match self.ledger.try_grant(subject, &candidate.threshold.award).await {
                Ok(true) => {
                    self.stats.update_stats(StatsEvent::AwardsGranted, 1);
                    self.notifier.notify(AwardNotification {
                        subject,
                        key: candidate.key.clone(),
                        threshold: candidate.threshold.value,
                        award: candidate.threshold.award.clone(),
                        definition: candidate.threshold.definition.clone(),
                    });
                    granted.push(candidate.threshold.award.clone());
                }
                Ok(false) => {
                    self.stats.update_stats(StatsEvent::AwardsDuplicate, 1);
                }
                Err(e) => {
                    let retry = candidates[index..].to_vec();
                    warn!("{} Recording awards of {} failed, {} queued for retry", LOG_PREFIX, subject, retry.len());
                    self.queue_pending(subject, retry);
                    return Err(e.into());
                }
            }
        }
        Ok(granted)
    }

    pub(crate) fn take_pending(&self, subject: SubjectId) -> Vec<AwardCandidate>
    {
        let mut lock = self.pending.write();
        match lock.remove(&subject) {
            None => vec![],
            Some(candidates) => {
                self.stats.update_stats(StatsEvent::AwardsPending, -(candidates.len() as i64));
                candidates
            }
        }
    }

    fn queue_pending(&self, subject: SubjectId, candidates: Vec<AwardCandidate>)
    {
        self.stats.update_stats(StatsEvent::AwardsPending, candidates.len() as i64);
        self.pending.write().entry(subject).or_default().extend(candidates);
    }

    pub fn pending_amount(&self, subject: SubjectId) -> usize
    {
        self.pending.read_recursive().get(&subject).map(Vec::len).unwrap_or(0)
    }

    /// Swaps in thresholds built from `config`. The previous thresholds stay in use when
    /// `config` is rejected.
    pub fn reload(&self, config: &AchievementsConfig) -> Result<(), EngineError>
    {
        self.thresholds.reload(config)?;
        Ok(())
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.update_stats(event, value);
    }

    pub fn get_stats(&self) -> Stats
    {
        self.stats.get_stats()
    }
}
