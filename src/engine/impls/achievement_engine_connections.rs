use crate::common::common::{connection_date, today};
use crate::engine::enums::engine_error::EngineError;
use crate::engine::structs::achievement_engine::AchievementEngine;
use crate::engine::traits::session_provider::SessionProvider;
use crate::statistics::enums::category::Category;
use crate::statistics::enums::normal_category::NormalCategory;
use crate::statistics::structs::award_id::AwardId;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::statistics::structs::subject_id::SubjectId;
use crate::stats::enums::stats_event::StatsEvent;
use crate::utils::sentry_tracing::{finish_trace_transaction, start_trace_transaction};
use chrono::NaiveDate;
use log::{debug, error};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

const LOG_PREFIX: &str = "[CONNECTIONS]";

impl AchievementEngine {
    /// Schedules the deferred connection check of `subject`.
    ///
    /// Returns `None` without spawning when the check already completed for this
    /// session. A scheduled check does not block other triggers; the guard is only
    /// claimed when a check runs.
    pub fn schedule_connection_check(self: &Arc<Self>, subject: SubjectId, sessions: Arc<dyn SessionProvider>) -> Option<JoinHandle<()>>
    {
        if self.guard.is_completed(subject) {
            self.stats.update_stats(StatsEvent::DeferredSkipped, 1);
            return None;
        }
        self.stats.update_stats(StatsEvent::DeferredScheduled, 1);

        let engine = self.clone();
        let delay = Duration::from_millis(self.config.engine.connection_check_delay);
        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = engine.run_connection_check(subject, sessions.as_ref()).await {
                engine.stats.update_stats(StatsEvent::StorageFailures, 1);
                error!("{} Check for {} failed: {}", LOG_PREFIX, subject, e);
            }
        }))
    }

    /// Body of the deferred check. Returns `None` when the subject left, is not eligible
    /// or another check already ran for this session.
    #[tracing::instrument(level = "debug", skip(self, sessions))]
    pub async fn run_connection_check(&self, subject: SubjectId, sessions: &dyn SessionProvider) -> Result<Option<Vec<AwardId>>, EngineError>
    {
        if !sessions.is_online(subject) || !sessions.is_eligible(subject, Category::Normal(NormalCategory::Connections)) {
            debug!("{} {} is gone or not eligible", LOG_PREFIX, subject);
            return Ok(None);
        }
        if !self.guard.try_begin_once(subject) {
            return Ok(None);
        }

        let transaction = start_trace_transaction("connection_check", "engine");
        let result = self.handle_connection(subject, today()).await;
        finish_trace_transaction(transaction, &result);

        // Subject left while the check ran.
        if !sessions.is_online(subject) {
            debug!("{} {} left during the check, releasing its state", LOG_PREFIX, subject);
            self.on_disconnect(subject).await?;
            if result.is_ok() {
                self.stats.update_stats(StatsEvent::DeferredCompleted, 1);
            }
            return result.map(Some);
        }
        match result {
            Ok(granted) => {
                self.stats.update_stats(StatsEvent::DeferredCompleted, 1);
                Ok(Some(granted))
            }
            Err(e) => {
                self.guard.abandon(subject);
                Err(e)
            }
        }
    }

    /// Counts one connection per calendar day.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn handle_connection(&self, subject: SubjectId, date: NaiveDate) -> Result<Vec<AwardId>, EngineError>
    {
        let date = connection_date(date);
        if self.storage.load_connection_date(subject).await?.as_deref() == Some(date.as_str()) {
            return self.retry_pending(subject).await;
        }

        let key = StatisticKey::normal(NormalCategory::Connections);
        // Loaded before the date is stored so the increment below cannot fail on a load.
        self.cache.get(subject, &key).await?;
        self.storage.save_connection_date(subject, &date).await?;
        self.process_increase(subject, &key, 1).await
    }
}
