#![allow(dead_code)]
use achievement_tracker::config::structs::achievement_config::AchievementConfig;
use achievement_tracker::config::structs::configuration::Configuration;
use achievement_tracker::database::enums::storage_error::StorageError;
use achievement_tracker::database::structs::memory_storage::MemoryStorage;
use achievement_tracker::database::traits::storage_backend::StorageBackend;
use achievement_tracker::engine::structs::achievement_engine::AchievementEngine;
use achievement_tracker::engine::structs::award_notification::AwardNotification;
use achievement_tracker::engine::traits::award_notifier::AwardNotifier;
use achievement_tracker::statistics::structs::award_id::AwardId;
use achievement_tracker::statistics::structs::statistic_key::StatisticKey;
use achievement_tracker::statistics::structs::subject_id::SubjectId;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

pub type TestEngine = Arc<AchievementEngine>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.database.path = String::from("sqlite::memory:");
    config.database.persistent = false;
    config.engine.connection_check_delay = 20;
    config
}

pub fn achievement(name: &str) -> AchievementConfig {
    AchievementConfig {
        name: name.to_string(),
        display_name: name.to_string(),
        message: format!("You earned {name}"),
        goal: String::new(),
        reward: None,
    }
}

/// Notifier keeping every notification for later assertions.
#[derive(Default)]
pub struct CollectingNotifier {
    pub notifications: Mutex<Vec<AwardNotification>>,
}

impl CollectingNotifier {
    pub fn awards(&self) -> Vec<AwardId> {
        self.notifications.lock().iter().map(|n| n.award.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }
}

impl AwardNotifier for CollectingNotifier {
    fn notify(&self, notification: AwardNotification) {
        self.notifications.lock().push(notification);
    }
}

/// Memory storage that fails award or counter writes on demand.
#[derive(Default)]
pub struct FailingStorage {
    pub inner: MemoryStorage,
    pub fail_awards: AtomicBool,
    pub fail_counters: AtomicBool,
    pub fail_connections: AtomicBool,
    pub connection_delay: AtomicU64,
}

impl FailingStorage {
    pub fn set_fail_awards(&self, fail: bool) {
        self.fail_awards.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_counters(&self, fail: bool) {
        self.fail_counters.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_connections(&self, fail: bool) {
        self.fail_connections.store(fail, Ordering::SeqCst);
    }

    /// Slows down connection date lookups by `millis`.
    pub fn set_connection_delay(&self, millis: u64) {
        self.connection_delay.store(millis, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool) -> Result<(), StorageError> {
        if flag.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(String::from("simulated outage")));
        }
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for FailingStorage {
    async fn load_counter(&self, subject: SubjectId, key: &StatisticKey) -> Result<u64, StorageError> {
        Self::check(&self.fail_counters)?;
        self.inner.load_counter(subject, key).await
    }

    async fn save_counter(&self, subject: SubjectId, key: &StatisticKey, value: u64) -> Result<(), StorageError> {
        Self::check(&self.fail_counters)?;
        self.inner.save_counter(subject, key, value).await
    }

    async fn save_counters(&self, counters: &[(SubjectId, StatisticKey, u64)]) -> Result<(), StorageError> {
        Self::check(&self.fail_counters)?;
        self.inner.save_counters(counters).await
    }

    async fn load_awards(&self, subject: SubjectId) -> Result<Vec<AwardId>, StorageError> {
        self.inner.load_awards(subject).await
    }

    async fn is_award_granted(&self, subject: SubjectId, award: &AwardId) -> Result<bool, StorageError> {
        self.inner.is_award_granted(subject, award).await
    }

    async fn record_award(&self, subject: SubjectId, award: &AwardId) -> Result<(), StorageError> {
        Self::check(&self.fail_awards)?;
        self.inner.record_award(subject, award).await
    }

    async fn load_connection_date(&self, subject: SubjectId) -> Result<Option<String>, StorageError> {
        let delay = self.connection_delay.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Self::check(&self.fail_connections)?;
        self.inner.load_connection_date(subject).await
    }

    async fn save_connection_date(&self, subject: SubjectId, date: &str) -> Result<(), StorageError> {
        Self::check(&self.fail_connections)?;
        self.inner.save_connection_date(subject, date).await
    }

    async fn create_tables(&self) -> Result<(), StorageError> {
        self.inner.create_tables().await
    }
}

pub fn create_test_engine_with(config: Configuration, storage: Arc<dyn StorageBackend>) -> (TestEngine, Arc<CollectingNotifier>) {
    let notifier = Arc::new(CollectingNotifier::default());
    let engine = AchievementEngine::new(Arc::new(config), storage, notifier.clone()).unwrap();
    (Arc::new(engine), notifier)
}

pub fn create_test_engine() -> (TestEngine, Arc<MemoryStorage>, Arc<CollectingNotifier>) {
    let storage = Arc::new(MemoryStorage::new());
    let (engine, notifier) = create_test_engine_with(create_test_config(), storage.clone());
    (engine, storage, notifier)
}

pub fn create_failing_engine() -> (TestEngine, Arc<FailingStorage>, Arc<CollectingNotifier>) {
    let storage = Arc::new(FailingStorage::default());
    let (engine, notifier) = create_test_engine_with(create_test_config(), storage.clone());
    (engine, storage, notifier)
}
