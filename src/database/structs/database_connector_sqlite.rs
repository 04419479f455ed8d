use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use sqlx::{Pool, Sqlite};

#[derive(Debug, Clone)]
pub struct DatabaseConnectorSQLite {
    pub(crate) pool: Pool<Sqlite>,
    pub(crate) structure: DatabaseStructureConfig,
}
