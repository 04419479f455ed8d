use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::storage_error::StorageError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::storage_backend::StorageBackend;
use crate::statistics::structs::award_id::AwardId;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::statistics::structs::subject_id::SubjectId;
use async_trait::async_trait;
use std::sync::Arc;

impl DatabaseConnector {
    pub async fn new(config: Arc<Configuration>) -> Result<DatabaseConnector, StorageError>
    {
        match config.database.engine {
            DatabaseDrivers::sqlite3 => DatabaseConnectorSQLite::database_connector(config).await,
            DatabaseDrivers::mysql => DatabaseConnectorMySQL::database_connector(config).await,
            DatabaseDrivers::pgsql => DatabaseConnectorPgSQL::database_connector(config).await,
        }
    }

    fn backend(&self) -> Result<&dyn StorageBackend, StorageError>
    {
        let backend: Option<&dyn StorageBackend> = match self.engine {
            Some(DatabaseDrivers::sqlite3) => self.sqlite.as_ref().map(|c| c as &dyn StorageBackend),
            Some(DatabaseDrivers::mysql) => self.mysql.as_ref().map(|c| c as &dyn StorageBackend),
            Some(DatabaseDrivers::pgsql) => self.pgsql.as_ref().map(|c| c as &dyn StorageBackend),
            None => None,
        };
        backend.ok_or_else(|| StorageError::Unavailable(String::from("no database engine connected")))
    }
}

#[async_trait]
impl StorageBackend for DatabaseConnector {
    async fn load_counter(&self, subject: SubjectId, key: &StatisticKey) -> Result<u64, StorageError> {
        self.backend()?.load_counter(subject, key).await
    }

    async fn save_counter(&self, subject: SubjectId, key: &StatisticKey, value: u64) -> Result<(), StorageError> {
        self.backend()?.save_counter(subject, key, value).await
    }

    async fn save_counters(&self, counters: &[(SubjectId, StatisticKey, u64)]) -> Result<(), StorageError> {
        self.backend()?.save_counters(counters).await
    }

    async fn load_awards(&self, subject: SubjectId) -> Result<Vec<AwardId>, StorageError> {
        self.backend()?.load_awards(subject).await
    }

    async fn is_award_granted(&self, subject: SubjectId, award: &AwardId) -> Result<bool, StorageError> {
        self.backend()?.is_award_granted(subject, award).await
    }

    async fn record_award(&self, subject: SubjectId, award: &AwardId) -> Result<(), StorageError> {
        self.backend()?.record_award(subject, award).await
    }

    async fn load_connection_date(&self, subject: SubjectId) -> Result<Option<String>, StorageError> {
        self.backend()?.load_connection_date(subject).await
    }

    async fn save_connection_date(&self, subject: SubjectId, date: &str) -> Result<(), StorageError> {
        self.backend()?.save_connection_date(subject, date).await
    }

    async fn create_tables(&self) -> Result<(), StorageError> {
        self.backend()?.create_tables().await
    }
}
