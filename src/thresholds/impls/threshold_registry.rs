use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::achievements_config::AchievementsConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::thresholds::structs::threshold_registry::ThresholdRegistry;
use crate::thresholds::structs::threshold_table::ThresholdTable;
use log::{error, info};
use parking_lot::RwLock;
use std::sync::Arc;

impl ThresholdRegistry {
    pub fn new(config: &AchievementsConfig, stats: Arc<StatsAtomics>) -> Result<ThresholdRegistry, ConfigurationError> {
        let table = ThresholdTable::build(config)?;
        info!("[THRESHOLDS] Loaded {} achievements", table.awards_amount());
        Ok(ThresholdRegistry {
            table: RwLock::new(Arc::new(table)),
            stats,
        })
    }

    pub fn current(&self) -> Arc<ThresholdTable> {
        self.table.read_recursive().clone()
    }

    /// Builds a new table and swaps it in. The previous table keeps serving when the
    /// new configuration is rejected.
    pub fn reload(&self, config: &AchievementsConfig) -> Result<Arc<ThresholdTable>, ConfigurationError> {
        match ThresholdTable::build(config) {
            Ok(table) => {
                let table = Arc::new(table);
                *self.table.write() = table.clone();
                self.stats.update_stats(StatsEvent::ThresholdReloads, 1);
                info!("[THRESHOLDS] Reloaded {} achievements", table.awards_amount());
                Ok(table)
            }
            Err(error) => {
                self.stats.update_stats(StatsEvent::ReloadFailures, 1);
                error!("[THRESHOLDS] Reload rejected, keeping the previous table: {error}");
                Err(error)
            }
        }
    }
}
