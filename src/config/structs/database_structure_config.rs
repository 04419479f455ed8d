use crate::config::structs::database_structure_config_achievements::DatabaseStructureConfigAchievements;
use crate::config::structs::database_structure_config_connections::DatabaseStructureConfigConnections;
use crate::config::structs::database_structure_config_statistics::DatabaseStructureConfigStatistics;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfig {
    pub statistics: DatabaseStructureConfigStatistics,
    pub achievements: DatabaseStructureConfigAchievements,
    pub connections: DatabaseStructureConfigConnections,
}
