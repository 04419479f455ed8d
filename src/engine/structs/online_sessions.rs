use crate::statistics::enums::category::Category;
use crate::statistics::structs::subject_id::SubjectId;
use ahash::AHashSet;
use parking_lot::RwLock;

/// Online subjects known to the host, with optional per-category restrictions.
#[derive(Debug, Default)]
pub struct OnlineSessions {
    pub(crate) online: RwLock<AHashSet<SubjectId>>,
    pub(crate) restricted: RwLock<AHashSet<(SubjectId, Category)>>,
}
