use crate::statistics::structs::subject_id::SubjectId;
use ahash::AHashSet;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct DeferredTaskGuard {
    pub(crate) completed: RwLock<AHashSet<SubjectId>>,
}
