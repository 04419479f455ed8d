mod common;

use achievement_tracker::config::structs::configuration::Configuration;
use achievement_tracker::database::structs::database_connector::DatabaseConnector;
use achievement_tracker::database::traits::storage_backend::StorageBackend;
use achievement_tracker::statistics::enums::multiple_category::MultipleCategory;
use achievement_tracker::statistics::enums::normal_category::NormalCategory;
use achievement_tracker::statistics::structs::award_id::AwardId;
use achievement_tracker::statistics::structs::statistic_key::StatisticKey;
use achievement_tracker::statistics::structs::subject_id::SubjectId;
use std::sync::Arc;
use tempfile::TempDir;

async fn create_sqlite(temp_dir: &TempDir) -> (Configuration, Arc<DatabaseConnector>) {
    let mut config = common::create_test_config();
    config.database.persistent = true;
    config.database.path = format!("sqlite://{}", temp_dir.path().join("achievements.db").display());
    let connector = DatabaseConnector::new(Arc::new(config.clone())).await.unwrap();
    connector.create_tables().await.unwrap();
    (config, Arc::new(connector))
}

#[tokio::test]
async fn test_sqlite_counters_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let (_, storage) = create_sqlite(&temp_dir).await;
    let subject = SubjectId::new_random();
    let stone = StatisticKey::multiple(MultipleCategory::Places, "stone");
    let deaths = StatisticKey::normal(NormalCategory::Deaths);

    assert_eq!(storage.load_counter(subject, &stone).await.unwrap(), 0);
    storage.save_counter(subject, &stone, 12).await.unwrap();
    storage.save_counters(&[(subject, stone.clone(), 15), (subject, deaths.clone(), 2)]).await.unwrap();

    assert_eq!(storage.load_counter(subject, &stone).await.unwrap(), 15);
    assert_eq!(storage.load_counter(subject, &deaths).await.unwrap(), 2);
    assert_eq!(storage.load_counter(SubjectId::new_random(), &deaths).await.unwrap(), 0);
}

#[tokio::test]
async fn test_sqlite_awards_are_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let (_, storage) = create_sqlite(&temp_dir).await;
    let subject = SubjectId::new_random();
    let mason = AwardId::from("Mason");

    assert!(!storage.is_award_granted(subject, &mason).await.unwrap());
    storage.record_award(subject, &mason).await.unwrap();
    storage.record_award(subject, &mason).await.unwrap();
    assert!(storage.is_award_granted(subject, &mason).await.unwrap());
    assert_eq!(storage.load_awards(subject).await.unwrap(), vec![mason]);
}

#[tokio::test]
async fn test_sqlite_connection_date() {
    let temp_dir = TempDir::new().unwrap();
    let (_, storage) = create_sqlite(&temp_dir).await;
    let subject = SubjectId::new_random();

    assert_eq!(storage.load_connection_date(subject).await.unwrap(), None);
    storage.save_connection_date(subject, "18/10/2026").await.unwrap();
    storage.save_connection_date(subject, "19/10/2026").await.unwrap();
    assert_eq!(storage.load_connection_date(subject).await.unwrap(), Some(String::from("19/10/2026")));
}

#[tokio::test]
async fn test_engine_state_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let (config, storage) = create_sqlite(&temp_dir).await;
    let subject = SubjectId::new_random();
    let stone = StatisticKey::multiple(MultipleCategory::Places, "stone");

    let (engine, notifier) = common::create_test_engine_with(config.clone(), storage.clone());
    engine.process_increase(subject, &stone, 11).await.unwrap();
    assert_eq!(notifier.len(), 1);
    engine.on_disconnect(subject).await.unwrap();

    let (engine, notifier) = common::create_test_engine_with(config, storage);
    assert_eq!(engine.cache.get(subject, &stone).await.unwrap(), 11);
    assert!(engine.process_increase(subject, &stone, 5).await.unwrap().is_empty());
    assert_eq!(notifier.len(), 0, "Stored awards are not granted again");
}

#[tokio::test]
async fn test_out_of_range_delta_does_not_block_write_back() {
    let temp_dir = TempDir::new().unwrap();
    let (config, storage) = create_sqlite(&temp_dir).await;
    let (engine, _) = common::create_test_engine_with(config, storage.clone());
    let large = SubjectId::new_random();
    let other = SubjectId::new_random();
    let deaths = StatisticKey::normal(NormalCategory::Deaths);

    assert!(engine.process_increase(large, &deaths, i64::MAX as u64 + 1).await.is_err());
    engine.process_increase(other, &deaths, 3).await.unwrap();

    assert_eq!(engine.flush().await.unwrap(), 1);
    assert_eq!(storage.load_counter(other, &deaths).await.unwrap(), 3);
    assert!(engine.on_disconnect(large).await.is_ok());
    assert!(engine.on_disconnect(other).await.is_ok());
}
