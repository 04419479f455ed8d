use crate::database::enums::database_drivers::DatabaseDrivers;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub engine: DatabaseDrivers,
    pub path: String,
    pub persistent: bool,
    pub persistent_interval: u64,
}
