use crate::common::common::shutdown_waiting;
use crate::engine::enums::engine_error::EngineError;
use crate::engine::structs::achievement_engine::AchievementEngine;
use crate::utils::sentry_tracing::{finish_trace_transaction, start_trace_transaction};
use log::{error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_shutdown::Shutdown;

impl AchievementEngine {
    /// Writes every dirty counter back to storage.
    pub async fn flush(&self) -> Result<usize, EngineError>
    {
        let transaction = start_trace_transaction("flush", "database");
        let result = self.cache.flush().await;
        finish_trace_transaction(transaction, &result);
        Ok(result?)
    }

    /// Flushes every `database.persistent_interval` seconds, and once more on shutdown.
    pub fn spawn_persistence(self: &Arc<Self>, shutdown: Shutdown) -> JoinHandle<()>
    {
        let engine = self.clone();
        let interval = self.config.database.persistent_interval.max(1);
        info!("[BOOT] Starting thread for database updates with {interval} seconds delay...");
        tokio::spawn(async move {
            loop {
                if shutdown_waiting(Duration::from_secs(interval), shutdown.clone()).await {
                    info!("[BOOT] Shutting down thread for updates...");
                    if let Err(e) = engine.flush().await {
                        error!("[DATABASE UPDATES] Final flush failed: {e}");
                    }
                    return;
                }
                match engine.flush().await {
                    Ok(amount) => info!("[DATABASE UPDATES] Saved {amount} counters"),
                    Err(e) => error!("[DATABASE UPDATES] Batch update failed, will retry: {e}"),
                }
            }
        })
    }
}
