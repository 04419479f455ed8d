use crate::common::common::current_timestamp;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::storage_error::StorageError;
use crate::database::helpers::{
    build_create_table_queries, build_insert_award_query, build_select_award_query,
    build_select_awards_query, build_select_connection_query, build_select_counter_query,
    build_upsert_connection_query, build_upsert_counter_query, from_stored_value, to_stored_value,
};
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::storage_backend::StorageBackend;
use crate::statistics::structs::award_id::AwardId;
use crate::statistics::structs::statistic_key::StatisticKey;
use crate::statistics::structs::subject_id::SubjectId;
use async_trait::async_trait;
use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Error, Pool, Sqlite, Row, Transaction};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

const ENGINE: DatabaseDrivers = DatabaseDrivers::sqlite3;
const LOG_PREFIX: &str = "[SQLite]";

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str) -> Result<Pool<Sqlite>, Error> {
        let options = SqliteConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1))
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);
        SqlitePoolOptions::new()
            .connect_with(options)
            .await
    }

    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn database_connector(config: Arc<Configuration>) -> Result<DatabaseConnector, StorageError> {
        let pool = match DatabaseConnectorSQLite::create(config.database.path.as_str()).await {
            Ok(pool) => pool,
            Err(e) => {
                error!("{} Unable to connect to SQLite on DSL {}", LOG_PREFIX, config.database.path);
                error!("{} Message: {}", LOG_PREFIX, e);
                return Err(StorageError::Database(e));
            }
        };
        Ok(DatabaseConnector {
            sqlite: Some(DatabaseConnectorSQLite {
                pool,
                structure: config.database_structure.clone(),
            }),
            mysql: None,
            pgsql: None,
            engine: Some(ENGINE),
        })
    }

    #[tracing::instrument(level = "debug", skip(self, transaction))]
    pub async fn commit(&self, transaction: Transaction<'_, Sqlite>) -> Result<(), StorageError> {
        match transaction.commit().await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("{} Error: {}", LOG_PREFIX, e);
                Err(StorageError::Database(e))
            }
        }
    }
}

#[async_trait]
impl StorageBackend for DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn load_counter(&self, subject: SubjectId, key: &StatisticKey) -> Result<u64, StorageError> {
        let query = build_select_counter_query(ENGINE, &self.structure);
        let row = sqlx::query(&query)
            .bind(subject.to_string())
            .bind(key.category().as_str())
            .bind(key.sub_key_column())
            .fetch_optional(&self.pool)
            .await?;
        match row {
            None => Ok(0),
            Some(row) => from_stored_value(row.try_get::<i64, _>(0)?),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn save_counter(&self, subject: SubjectId, key: &StatisticKey, value: u64) -> Result<(), StorageError> {
        let query = build_upsert_counter_query(ENGINE, &self.structure);
        sqlx::query(&query)
            .bind(subject.to_string())
            .bind(key.category().as_str())
            .bind(key.sub_key_column())
            .bind(to_stored_value(value)?)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, counters))]
    async fn save_counters(&self, counters: &[(SubjectId, StatisticKey, u64)]) -> Result<(), StorageError> {
        if counters.is_empty() {
            return Ok(());
        }
        let query = build_upsert_counter_query(ENGINE, &self.structure);
        let mut transaction = self.pool.begin().await?;
        for (subject, key, value) in counters {
            if let Err(e) = sqlx::query(&query)
                .bind(subject.to_string())
                .bind(key.category().as_str())
                .bind(key.sub_key_column())
                .bind(to_stored_value(*value)?)
                .execute(&mut *transaction)
                .await
            {
                error!("{} Error: {}", LOG_PREFIX, e);
                return Err(StorageError::Database(e));
            }
        }
        self.commit(transaction).await?;
        info!("{} Saved {} counters", LOG_PREFIX, counters.len());
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn load_awards(&self, subject: SubjectId) -> Result<Vec<AwardId>, StorageError> {
        let query = build_select_awards_query(ENGINE, &self.structure);
        let rows = sqlx::query(&query)
            .bind(subject.to_string())
            .fetch_all(&self.pool)
            .await?;
        let mut awards = Vec::with_capacity(rows.len());
        for row in rows {
            awards.push(AwardId::from(row.try_get::<String, _>(0)?));
        }
        Ok(awards)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn is_award_granted(&self, subject: SubjectId, award: &AwardId) -> Result<bool, StorageError> {
        let query = build_select_award_query(ENGINE, &self.structure);
        let row = sqlx::query(&query)
            .bind(subject.to_string())
            .bind(award.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<i64, _>(0)? > 0)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn record_award(&self, subject: SubjectId, award: &AwardId) -> Result<(), StorageError> {
        let query = build_insert_award_query(ENGINE, &self.structure);
        sqlx::query(&query)
            .bind(subject.to_string())
            .bind(award.as_str())
            .bind(current_timestamp())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn load_connection_date(&self, subject: SubjectId) -> Result<Option<String>, StorageError> {
        let query = build_select_connection_query(ENGINE, &self.structure);
        let row = sqlx::query(&query)
            .bind(subject.to_string())
            .fetch_optional(&self.pool)
            .await?;
        match row {
            None => Ok(None),
            Some(row) => Ok(Some(row.try_get::<String, _>(0)?)),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn save_connection_date(&self, subject: SubjectId, date: &str) -> Result<(), StorageError> {
        let query = build_upsert_connection_query(ENGINE, &self.structure);
        sqlx::query(&query)
            .bind(subject.to_string())
            .bind(date)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn create_tables(&self) -> Result<(), StorageError> {
        info!("[BOOT] Database creation triggered for SQLite.");
        info!("[BOOT SQLite] Setting the PRAGMA config...");
        for pragma in ["PRAGMA temp_store = memory;", "PRAGMA journal_mode = WAL;", "PRAGMA synchronous = full;"] {
            sqlx::query(pragma).execute(&self.pool).await?;
        }
        for query in build_create_table_queries(ENGINE, &self.structure) {
            info!("[BOOT SQLite] {}", query);
            if let Err(e) = sqlx::query(&query).execute(&self.pool).await {
                error!("{} Error: {}", LOG_PREFIX, e);
                return Err(StorageError::Database(e));
            }
        }
        info!("[BOOT] Created the database and tables, restart without the parameter to start the app.");
        Ok(())
    }
}
