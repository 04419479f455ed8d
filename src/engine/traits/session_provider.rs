use crate::statistics::enums::category::Category;
use crate::statistics::structs::subject_id::SubjectId;

/// Liveness and permission checks of the host, consulted when a deferred check runs.
pub trait SessionProvider: Send + Sync {
    fn is_online(&self, subject: SubjectId) -> bool;

    fn is_eligible(&self, subject: SubjectId, category: Category) -> bool;
}
