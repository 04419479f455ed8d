mod common;

use achievement_tracker::database::structs::memory_storage::MemoryStorage;
use achievement_tracker::database::traits::storage_backend::StorageBackend;
use achievement_tracker::statistics::enums::multiple_category::MultipleCategory;
use achievement_tracker::statistics::enums::normal_category::NormalCategory;
use achievement_tracker::statistics::structs::award_id::AwardId;
use achievement_tracker::statistics::structs::statistic_key::StatisticKey;
use achievement_tracker::statistics::structs::subject_id::SubjectId;
use std::collections::BTreeMap;
use std::sync::Arc;

#[tokio::test]
async fn test_first_login_award() {
    let (engine, storage, notifier) = common::create_test_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::normal(NormalCategory::Connections);

    let granted = engine.process_increase(subject, &key, 1).await.unwrap();
    assert_eq!(granted, vec![AwardId::from("First Login")]);
    assert_eq!(notifier.awards(), vec![AwardId::from("First Login")]);
    assert_eq!(notifier.notifications.lock()[0].threshold, 1);
    assert!(storage.is_award_granted(subject, &AwardId::from("First Login")).await.unwrap());

    let granted = engine.process_increase(subject, &key, 1).await.unwrap();
    assert!(granted.is_empty(), "Award must not be granted twice");
    assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn test_mason_crossed_by_larger_delta() {
    let (engine, _, notifier) = common::create_test_engine();
    let subject = SubjectId::new_random();

    assert!(engine.process_event(subject, MultipleCategory::Places, &["stone"], 8).await.unwrap().is_empty());
    let granted = engine.process_event(subject, MultipleCategory::Places, &["stone"], 4).await.unwrap();
    assert_eq!(granted, vec![AwardId::from("Mason")]);
    assert_eq!(notifier.len(), 1);

    let key = StatisticKey::multiple(MultipleCategory::Places, "stone");
    assert_eq!(engine.cache.get(subject, &key).await.unwrap(), 12);
}

#[tokio::test]
async fn test_several_thresholds_in_one_increase() {
    let (engine, _, notifier) = common::create_test_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::normal(NormalCategory::Connections);

    let granted = engine.process_increase(subject, &key, 7).await.unwrap();
    assert_eq!(granted, vec![AwardId::from("First Login"), AwardId::from("Regular")]);
    assert_eq!(notifier.awards(), granted);
}

#[tokio::test]
async fn test_zero_delta_changes_nothing() {
    let (engine, storage, notifier) = common::create_test_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::normal(NormalCategory::Connections);

    assert!(engine.process_increase(subject, &key, 0).await.unwrap().is_empty());
    assert_eq!(notifier.len(), 0);
    assert_eq!(storage.awards_amount(subject), 0);
    assert_eq!(engine.get_stats().events_ignored, 1);
}

#[tokio::test]
async fn test_disabled_category_is_ignored() {
    let mut config = common::create_test_config();
    config.achievements.disabled_categories = vec![String::from("Places")];
    let (engine, notifier) = common::create_test_engine_with(config, Arc::new(MemoryStorage::new()));
    let subject = SubjectId::new_random();

    assert!(engine.process_event(subject, MultipleCategory::Places, &["stone"], 50).await.unwrap().is_empty());
    assert!(!engine.cache.contains(subject, &StatisticKey::multiple(MultipleCategory::Places, "stone")));
    assert_eq!(notifier.len(), 0);
}

#[tokio::test]
async fn test_sub_key_group_matches_any_member() {
    let mut config = common::create_test_config();
    config.achievements.multiple.insert(String::from("Breaks"), BTreeMap::from([
        (String::from("oak_log|birch_log"), BTreeMap::from([
            (String::from("2"), common::achievement("Lumberjack")),
        ])),
    ]));
    let (engine, notifier) = common::create_test_engine_with(config, Arc::new(MemoryStorage::new()));
    let subject = SubjectId::new_random();

    assert!(engine.process_event(subject, MultipleCategory::Breaks, &["oak_log"], 1).await.unwrap().is_empty());
    let granted = engine.process_event(subject, MultipleCategory::Breaks, &["birch_log"], 1).await.unwrap();
    assert_eq!(granted, vec![AwardId::from("Lumberjack")]);

    let key = StatisticKey::multiple(MultipleCategory::Breaks, "oak_log|birch_log");
    assert_eq!(engine.cache.get(subject, &key).await.unwrap(), 2);
    assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn test_previously_stored_award_is_not_granted_again() {
    let (engine, storage, notifier) = common::create_test_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::multiple(MultipleCategory::Places, "stone");
    storage.save_counter(subject, &key, 9).await.unwrap();
    storage.record_award(subject, &AwardId::from("Mason")).await.unwrap();

    assert!(engine.process_increase(subject, &key, 1).await.unwrap().is_empty());
    assert_eq!(engine.cache.get(subject, &key).await.unwrap(), 10);
    assert_eq!(notifier.len(), 0);
    assert_eq!(engine.get_stats().awards_duplicate, 1);
}

#[tokio::test]
async fn test_reload_adds_threshold() {
    let (engine, _, notifier) = common::create_test_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::multiple(MultipleCategory::Places, "stone");
    engine.process_increase(subject, &key, 12).await.unwrap();

    let mut achievements = common::create_test_config().achievements;
    achievements.multiple.get_mut("Places").unwrap().get_mut("stone").unwrap()
        .insert(String::from("20"), common::achievement("Master Mason"));
    engine.reload(&achievements).unwrap();

    let granted = engine.process_increase(subject, &key, 8).await.unwrap();
    assert_eq!(granted, vec![AwardId::from("Master Mason")]);
    assert_eq!(notifier.awards(), vec![AwardId::from("Mason"), AwardId::from("Master Mason")]);
    assert_eq!(engine.get_stats().threshold_reloads, 1);
}

#[tokio::test]
async fn test_rejected_reload_keeps_thresholds() {
    let (engine, _, _) = common::create_test_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::multiple(MultipleCategory::Places, "stone");

    let mut achievements = common::create_test_config().achievements;
    achievements.multiple.get_mut("Places").unwrap().get_mut("stone").unwrap()
        .insert(String::from("lots"), common::achievement("Master Mason"));
    assert!(engine.reload(&achievements).is_err());

    let granted = engine.process_increase(subject, &key, 10).await.unwrap();
    assert_eq!(granted, vec![AwardId::from("Mason")]);
    assert_eq!(engine.get_stats().reload_failures, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_increments_grant_once() {
    let (engine, storage, notifier) = common::create_test_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::multiple(MultipleCategory::Places, "stone");

    let mut handles = Vec::new();
    for _ in 0..50 {
        let engine = engine.clone();
        let key = key.clone();
        handles.push(tokio::spawn(async move {
            engine.process_increase(subject, &key, 1).await.unwrap()
        }));
    }
    let mut granted = Vec::new();
    for handle in handles {
        granted.extend(handle.await.unwrap());
    }

    assert_eq!(granted, vec![AwardId::from("Mason")]);
    assert_eq!(notifier.len(), 1);
    assert_eq!(storage.awards_amount(subject), 1);
    assert_eq!(engine.cache.get(subject, &key).await.unwrap(), 50);
}

#[tokio::test]
async fn test_failed_award_write_is_retried() {
    let (engine, storage, notifier) = common::create_failing_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::multiple(MultipleCategory::Places, "stone");

    storage.set_fail_awards(true);
    assert!(engine.process_increase(subject, &key, 10).await.is_err());
    assert_eq!(engine.cache.get(subject, &key).await.unwrap(), 10, "Counter moves even when the award write fails");
    assert_eq!(engine.pending_amount(subject), 1);
    assert_eq!(notifier.len(), 0, "No notification before the award is stored");

    storage.set_fail_awards(false);
    let granted = engine.process_increase(subject, &key, 1).await.unwrap();
    assert_eq!(granted, vec![AwardId::from("Mason")]);
    assert_eq!(engine.pending_amount(subject), 0);
    assert_eq!(notifier.len(), 1);
    assert_eq!(storage.inner.awards_amount(subject), 1);
}

#[tokio::test]
async fn test_record_event_isolates_failures() {
    let (engine, storage, _) = common::create_failing_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::normal(NormalCategory::Deaths);

    storage.set_fail_counters(true);
    assert!(engine.record_event(subject, &key, 1).await.is_empty());
    assert_eq!(engine.get_stats().storage_failures, 1);

    storage.set_fail_counters(false);
    engine.record_event(subject, &key, 1).await;
    assert_eq!(engine.cache.get(subject, &key).await.unwrap(), 1);
}

#[tokio::test]
async fn test_flush_writes_back_counters() {
    let (engine, storage, _) = common::create_test_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::normal(NormalCategory::Deaths);

    engine.process_increase(subject, &key, 3).await.unwrap();
    assert_eq!(storage.counter(subject, &key), None);
    assert_eq!(engine.flush().await.unwrap(), 1);
    assert_eq!(storage.counter(subject, &key), Some(3));
    assert_eq!(engine.flush().await.unwrap(), 0, "Clean counters are not written again");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_large_increments_grant_once() {
    let (engine, storage, notifier) = common::create_test_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::multiple(MultipleCategory::Places, "stone");

    let mut handles = Vec::new();
    for _ in 0..50 {
        let engine = engine.clone();
        let key = key.clone();
        handles.push(tokio::spawn(async move {
            engine.process_increase(subject, &key, 15).await.unwrap()
        }));
    }
    let mut granted = Vec::new();
    for handle in handles {
        granted.extend(handle.await.unwrap());
    }

    assert_eq!(granted, vec![AwardId::from("Mason")]);
    assert_eq!(notifier.len(), 1);
    assert_eq!(storage.awards_amount(subject), 1);
    assert_eq!(engine.cache.get(subject, &key).await.unwrap(), 50 * 15);
}

#[tokio::test]
async fn test_disconnect_retries_pending_awards() {
    let (engine, storage, notifier) = common::create_failing_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::multiple(MultipleCategory::Places, "stone");

    storage.set_fail_awards(true);
    assert!(engine.process_increase(subject, &key, 10).await.is_err());
    storage.set_fail_awards(false);

    engine.on_disconnect(subject).await.unwrap();
    assert_eq!(engine.pending_amount(subject), 0);
    assert_eq!(notifier.awards(), vec![AwardId::from("Mason")]);
    assert_eq!(storage.inner.awards_amount(subject), 1);
}

#[tokio::test]
async fn test_disconnect_drops_pending_awards_that_still_fail() {
    let (engine, storage, notifier) = common::create_failing_engine();
    let subject = SubjectId::new_random();
    let key = StatisticKey::multiple(MultipleCategory::Places, "stone");

    storage.set_fail_awards(true);
    assert!(engine.process_increase(subject, &key, 10).await.is_err());

    engine.on_disconnect(subject).await.unwrap();
    assert_eq!(engine.pending_amount(subject), 0);
    assert_eq!(engine.get_stats().awards_pending, 0);
    assert_eq!(notifier.len(), 0);
    assert!(!engine.cache.contains(subject, &key));
}
