use crate::config::structs::achievements_config::AchievementsConfig;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::engine_config::EngineConfig;
use crate::config::structs::sentry_config::SentryConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    #[serde(default)]
    pub engine: EngineConfig,
    pub database: DatabaseConfig,
    pub database_structure: DatabaseStructureConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig,
    pub achievements: AchievementsConfig,
}
