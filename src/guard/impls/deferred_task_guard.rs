use crate::guard::structs::deferred_task_guard::DeferredTaskGuard;
use crate::statistics::structs::subject_id::SubjectId;

impl DeferredTaskGuard {
    pub fn new() -> DeferredTaskGuard {
        DeferredTaskGuard::default()
    }

    /// `true` for exactly one caller per session.
    pub fn try_begin_once(&self, subject: SubjectId) -> bool {
        self.completed.write().insert(subject)
    }

    pub fn is_completed(&self, subject: SubjectId) -> bool {
        self.completed.read_recursive().contains(&subject)
    }

    /// Releases a claim whose check failed, so a later trigger can retry.
    pub fn abandon(&self, subject: SubjectId) {
        self.completed.write().remove(&subject);
    }

    /// Resets the subject for its next session.
    pub fn clear(&self, subject: SubjectId) {
        self.completed.write().remove(&subject);
    }

    pub fn len(&self) -> usize {
        self.completed.read_recursive().len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.read_recursive().is_empty()
    }
}
