mod common;

use achievement_tracker::guard::structs::deferred_task_guard::DeferredTaskGuard;
use achievement_tracker::statistics::structs::subject_id::SubjectId;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_guard_admits_one_task_per_subject() {
    let guard = Arc::new(DeferredTaskGuard::new());
    let subject = SubjectId::new_random();
    let admitted = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for _ in 0..32 {
        let guard = guard.clone();
        let admitted = admitted.clone();
        handles.push(tokio::spawn(async move {
            if guard.try_begin_once(subject) {
                admitted.fetch_add(1, Ordering::SeqCst);
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(admitted.load(Ordering::SeqCst), 1);
    assert_eq!(guard.len(), 1);
}

#[test]
fn test_guard_clear_starts_new_session() {
    let guard = DeferredTaskGuard::new();
    let subject = SubjectId::new_random();
    assert!(guard.try_begin_once(subject));
    guard.clear(subject);
    assert!(guard.is_empty());
    assert!(guard.try_begin_once(subject));
}
