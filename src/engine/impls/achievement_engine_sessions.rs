use crate::engine::enums::engine_error::EngineError;
use crate::engine::structs::achievement_engine::AchievementEngine;
use crate::engine::traits::session_provider::SessionProvider;
use crate::statistics::structs::subject_id::SubjectId;
use crate::stats::enums::stats_event::StatsEvent;
use log::{debug, error, warn};
use std::sync::Arc;
use tokio::task::JoinHandle;

impl AchievementEngine {
    pub fn on_join(self: &Arc<Self>, subject: SubjectId, sessions: Arc<dyn SessionProvider>) -> Option<JoinHandle<()>>
    {
        self.schedule_connection_check(subject, sessions)
    }

    pub fn on_world_changed(self: &Arc<Self>, subject: SubjectId, sessions: Arc<dyn SessionProvider>) -> Option<JoinHandle<()>>
    {
        self.schedule_connection_check(subject, sessions)
    }

    pub fn on_game_mode_changed(self: &Arc<Self>, subject: SubjectId, sessions: Arc<dyn SessionProvider>) -> Option<JoinHandle<()>>
    {
        self.schedule_connection_check(subject, sessions)
    }

    /// Ends the session of `subject`: resets the deferred guard, retries its pending
    /// awards once, then writes back and drops its cached counters and granted set.
    /// Awards still pending after the retry are dropped.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn on_disconnect(&self, subject: SubjectId) -> Result<(), EngineError>
    {
        self.guard.clear(subject);
        if self.pending_amount(subject) > 0 {
            if let Err(e) = self.retry_pending(subject).await {
                warn!("[SESSIONS] Retrying pending awards of {} failed: {}", subject, e);
            }
            let dropped = self.take_pending(subject);
            if !dropped.is_empty() {
                self.stats.update_stats(StatsEvent::StorageFailures, 1);
                error!("[SESSIONS] Dropped {} pending awards of {}", dropped.len(), subject);
            }
        }
        let evicted = self.cache.evict(subject).await?;
        self.ledger.evict(subject).await;
        debug!("[SESSIONS] {} disconnected, {} counters written back", subject, evicted);
        Ok(())
    }
}
