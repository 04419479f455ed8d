use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use sqlx::{Pool, Postgres};

#[derive(Debug, Clone)]
pub struct DatabaseConnectorPgSQL {
    pub(crate) pool: Pool<Postgres>,
    pub(crate) structure: DatabaseStructureConfig,
}
